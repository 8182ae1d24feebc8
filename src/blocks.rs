use crate::message::ContentBlock;

/// Segment a finalized message body into prose and fenced-code blocks.
///
/// Pieces between triple-backtick fences alternate: even-indexed pieces are
/// prose (emitted only when non-empty), odd-indexed pieces are fenced bodies.
/// An unterminated trailing fence is still treated as a fenced body; the
/// display layer tolerates it, so no error state exists here.
pub fn parse_blocks(content: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    for (index, piece) in content.split("```").enumerate() {
        if index % 2 == 0 {
            if !piece.is_empty() {
                blocks.push(ContentBlock::Text(piece.to_string()));
            }
        } else {
            blocks.push(code_block(piece));
        }
    }

    blocks
}

fn code_block(piece: &str) -> ContentBlock {
    match piece.find('\n') {
        Some(newline) => {
            let language = piece[..newline].trim();
            ContentBlock::Code {
                language: if language.is_empty() {
                    "text".to_string()
                } else {
                    language.to_string()
                },
                code: piece[newline + 1..].to_string(),
            }
        }
        // No newline anywhere: the whole piece is the body.
        None => ContentBlock::Code {
            language: "text".to_string(),
            code: piece.to_string(),
        },
    }
}
