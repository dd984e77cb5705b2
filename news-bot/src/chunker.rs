//! Response chunker: packs rendered news items into bounded-size messages.
//!
//! Items are never split and keep their order. A chunk is flushed as soon as the next item
//! would push it over the budget. Lengths are counted in characters.

use news_storage::NewsRecord;

/// Sent instead of an empty chunk list.
pub const NO_RESULTS: &str = "Нет новостей для отображения.";

/// Default per-message budget, below Telegram's 4096-character limit.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 4000;

/// `🔹 {title} ({YYYY-MM-DD}): {link}` followed by a blank line.
pub fn render_item(record: &NewsRecord) -> String {
    format!(
        "🔹 {} ({}): {}\n\n",
        record.title,
        record.published_at.format("%Y-%m-%d"),
        record.link
    )
}

/// Lazily chunks `items` under `max_len`.
pub fn chunk_items<I>(items: I, max_len: usize) -> Chunks<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    Chunks {
        items: items.into_iter(),
        max_len,
        current: String::new(),
        current_len: 0,
        emitted: false,
        finished: false,
    }
}

/// Renders and chunks records in one step.
pub fn chunk_records(records: &[NewsRecord], max_len: usize) -> Chunks<impl Iterator<Item = String> + '_> {
    chunk_items(records.iter().map(render_item), max_len)
}

/// Iterator returned by [`chunk_items`].
///
/// Yields [`NO_RESULTS`] once for empty input. An item longer than `max_len` on its own
/// becomes a chunk by itself.
pub struct Chunks<I> {
    items: I,
    max_len: usize,
    current: String,
    current_len: usize,
    emitted: bool,
    finished: bool,
}

impl<I> Iterator for Chunks<I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        for item in self.items.by_ref() {
            let item_len = item.chars().count();
            if !self.current.is_empty() && self.current_len + item_len > self.max_len {
                let chunk = std::mem::replace(&mut self.current, item);
                self.current_len = item_len;
                self.emitted = true;
                return Some(chunk);
            }
            self.current.push_str(&item);
            self.current_len += item_len;
        }

        self.finished = true;
        if !self.current.is_empty() {
            self.emitted = true;
            self.current_len = 0;
            return Some(std::mem::take(&mut self.current));
        }
        if !self.emitted {
            self.emitted = true;
            return Some(NO_RESULTS.to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(len: usize) -> String {
        "x".repeat(len)
    }

    #[test]
    fn test_chunks_flush_before_overflow() {
        let chunks: Vec<String> =
            chunk_items(vec![item(1000), item(1000), item(1000), item(1500)], 4000).collect();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 3000);
        assert_eq!(chunks[1].len(), 1500);
    }

    #[test]
    fn test_exact_fit_stays_in_one_chunk() {
        let chunks: Vec<String> = chunk_items(vec![item(2000), item(2000)], 4000).collect();
        assert_eq!(chunks, vec![item(4000)]);
    }

    #[test]
    fn test_empty_input_yields_sentinel_once() {
        let chunks: Vec<String> = chunk_items(Vec::<String>::new(), 4000).collect();
        assert_eq!(chunks, vec![NO_RESULTS.to_string()]);
    }

    #[test]
    fn test_oversized_item_is_not_split() {
        let chunks: Vec<String> =
            chunk_items(vec![item(10), item(50), item(10)], 20).collect();
        assert_eq!(chunks, vec![item(10), item(50), item(10)]);
    }

    #[test]
    fn test_order_is_preserved_and_every_chunk_within_budget() {
        let items: Vec<String> = (0..50).map(|i| format!("{:03}|", i)).collect();
        let chunks: Vec<String> = chunk_items(items.clone(), 18).collect();

        assert!(chunks.iter().all(|c| c.chars().count() <= 18));
        assert_eq!(chunks.concat(), items.concat());
    }

    #[test]
    fn test_budget_counts_characters_not_bytes() {
        // 10 Cyrillic characters are 20 bytes
        let word = "дтпдтпдтпд".to_string();
        let chunks: Vec<String> = chunk_items(vec![word.clone(), word.clone()], 20).collect();
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_chunks_is_lazy() {
        let mut pulled = 0;
        let items = std::iter::from_fn(|| {
            pulled += 1;
            Some(item(10))
        });
        let first = chunk_items(items, 25).next();
        assert_eq!(first, Some(item(20)));
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_render_item() {
        let record = NewsRecord::new(
            "Бюджет принят",
            NaiveDate::from_ymd_opt(2024, 12, 3)
                .unwrap()
                .and_hms_opt(17, 45, 0)
                .unwrap(),
            "https://polit74.ru/economics/1/",
            "economics",
        );
        assert_eq!(
            render_item(&record),
            "🔹 Бюджет принят (2024-12-03): https://polit74.ru/economics/1/\n\n"
        );
    }
}
