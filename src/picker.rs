//! Interactive line selection.
//!
//! The blame flow asks a [`Selector`] which attribution record the user means.
//! [`SkimSelector`] is the interactive terminal picker; tests substitute a
//! scripted selector.

#[cfg(not(all(unix, feature = "cli")))]
use crate::Error;
use crate::git::AttributionRecord;

/// Chooses one record out of a non-empty list.
pub trait Selector {
    /// Index into `records` of the chosen record.
    ///
    /// Cancelling fails with [`crate::Error::SelectionAborted`].
    fn select(&self, records: &[AttributionRecord]) -> anyhow::Result<usize>;
}

#[cfg(all(unix, feature = "cli"))]
pub use skim_picker::SkimSelector;

#[cfg(all(unix, feature = "cli"))]
mod skim_picker {
    use std::borrow::Cow;
    use std::io::IsTerminal;
    use std::sync::Arc;

    use skim::prelude::*;

    use super::Selector;
    use crate::Error;
    use crate::git::AttributionRecord;

    /// One blame line in the picker. Searching matches the whole line; the
    /// output is the record's position so duplicates stay distinguishable.
    struct RecordItem {
        index: usize,
        display_text: String,
    }

    impl SkimItem for RecordItem {
        fn text(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.display_text)
        }

        fn output(&self) -> Cow<'_, str> {
            Cow::Owned(self.index.to_string())
        }
    }

    /// Fuzzy picker over blame lines, rendered with skim.
    #[derive(Debug, Default)]
    pub struct SkimSelector;

    impl Selector for SkimSelector {
        fn select(&self, records: &[AttributionRecord]) -> anyhow::Result<usize> {
            if !std::io::stdin().is_terminal() {
                anyhow::bail!("Interactive picker requires an interactive terminal");
            }

            let options = SkimOptionsBuilder::default()
                .height("100%".to_string())
                .multi(false)
                .no_info(true)
                .color(Some(
                    "fg:-1,bg:-1,matched:108,current:237,current_bg:251,current_match:108"
                        .to_string(),
                ))
                .build()
                .map_err(|e| anyhow::anyhow!("Failed to build skim options: {}", e))?;

            let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
            for (index, record) in records.iter().enumerate() {
                let item: Arc<dyn SkimItem> = Arc::new(RecordItem {
                    index,
                    display_text: record.display(),
                });
                tx.send(item)
                    .map_err(|e| anyhow::anyhow!("Failed to send item to skim: {}", e))?;
            }
            drop(tx);

            let output = Skim::run_with(&options, Some(rx));
            let Some(out) = output.filter(|out| !out.is_abort) else {
                return Err(Error::SelectionAborted.into());
            };
            let index = out
                .selected_items
                .first()
                .and_then(|item| item.output().parse::<usize>().ok())
                .ok_or(Error::SelectionAborted)?;
            log::debug!("Selected line {index}: {}", records[index].display());
            Ok(index)
        }
    }
}

/// Stand-in where skim is not available.
#[cfg(not(all(unix, feature = "cli")))]
#[derive(Debug, Default)]
pub struct SkimSelector;

#[cfg(not(all(unix, feature = "cli")))]
impl Selector for SkimSelector {
    fn select(&self, _records: &[AttributionRecord]) -> anyhow::Result<usize> {
        Err(Error::PickerUnavailable.into())
    }
}
