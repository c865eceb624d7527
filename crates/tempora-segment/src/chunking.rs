//! Paragraph-preserving chunker.

use tempora_core::Chunk;

/// Split `full_text` into chunks of at most `max_chars` characters.
///
/// Paragraphs (newline-separated) are accumulated greedily; a paragraph
/// that would overflow the current chunk starts a new one, and a single
/// paragraph longer than `max_chars` is hard-split at `max_chars`
/// boundaries. Chunk ids are sequential from 0 in document order.
pub fn chunk_text(full_text: &str, max_chars: usize) -> Vec<Chunk> {
    let paragraphs: Vec<&str> = full_text
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut buf: Vec<&str> = Vec::new();
    let mut buf_len = 0usize;

    let flush = |chunks: &mut Vec<Chunk>, buf: &mut Vec<&str>, buf_len: &mut usize| {
        if !buf.is_empty() {
            chunks.push(Chunk {
                chunk_id: chunks.len(),
                text: buf.join("\n"),
            });
            buf.clear();
            *buf_len = 0;
        }
    };

    for p in paragraphs {
        let p_len = p.chars().count();

        // Oversized paragraph: flush the buffer, then hard-split it.
        if p_len > max_chars {
            flush(&mut chunks, &mut buf, &mut buf_len);
            let chars: Vec<char> = p.chars().collect();
            for part in chars.chunks(max_chars) {
                chunks.push(Chunk {
                    chunk_id: chunks.len(),
                    text: part.iter().collect(),
                });
            }
            continue;
        }

        // +1 for the joining newline when the buffer is non-empty.
        let extra = p_len + usize::from(!buf.is_empty());
        if buf_len + extra > max_chars {
            flush(&mut chunks, &mut buf, &mut buf_len);
            buf.push(p);
            buf_len = p_len;
        } else {
            buf.push(p);
            buf_len += extra;
        }
    }
    flush(&mut chunks, &mut buf, &mut buf_len);

    chunks
}
