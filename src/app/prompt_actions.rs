//! Modal prompt loop and the actions built on it.

use super::search::SearchObserver;
use super::Editor;
use crate::prompt::{KeystrokeObserver, Prompt, PromptOutcome, PromptType};
use crate::services::terminal::TerminalIo;
use anyhow::Result as AnyhowResult;

impl<T: TerminalIo> Editor<T> {
    /// Read a line of input in the message bar.
    ///
    /// The observer sees every key after the prompt has applied it, and its hint is shown
    /// after the input. Returns `None` on Escape.
    pub(crate) fn prompt(
        &mut self,
        prompt_type: PromptType,
        observer: &mut dyn KeystrokeObserver,
    ) -> AnyhowResult<Option<String>> {
        let mut prompt = Prompt::new(prompt_type);
        loop {
            let hint = observer.hint();
            self.state
                .set_status_message(prompt.message_with_hint(hint.as_deref()));
            self.refresh_screen()?;

            let key = self.next_key()?;
            let outcome = prompt.handle_key(key);
            if outcome != PromptOutcome::Pending {
                self.state.set_status_message("");
            }
            observer.on_keystroke(&mut self.state, &prompt.input, key);

            match outcome {
                PromptOutcome::Pending => {}
                PromptOutcome::Confirmed(input) => return Ok(Some(input)),
                PromptOutcome::Cancelled => return Ok(None),
            }
        }
    }

    /// Incremental search. Escape puts the cursor and scroll position back.
    pub(crate) fn find(&mut self) -> AnyhowResult<()> {
        let saved_cursor = self.state.cursor;
        let saved_offsets = (
            self.state.viewport.row_offset,
            self.state.viewport.col_offset,
        );

        let mut observer = SearchObserver::new();
        if self.prompt(PromptType::Search, &mut observer)?.is_none() {
            self.state.cursor = saved_cursor;
            (
                self.state.viewport.row_offset,
                self.state.viewport.col_offset,
            ) = saved_offsets;
        }
        Ok(())
    }
}
