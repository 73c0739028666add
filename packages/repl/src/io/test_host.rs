//! In-memory [`IoHost`] for driving the REPL from tests.

use std::collections::VecDeque;

use super::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

/// Test host with in-memory I/O buffers.
///
/// Input lines and signals are consumed in the order they were queued. A
/// queued signal is delivered before any queued line. Once both queues are
/// empty the host reports EOF, so a script without `exit` still ends.
#[derive(Debug, Default)]
pub struct TestHost {
    input_queue: VecDeque<String>,
    signal_queue: VecDeque<Signal>,
    output_buffer: Vec<Output>,
    prompts: Vec<PromptConfig>,
    pending_eof: bool,
    flush_count: usize,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with `lines` already queued.
    pub fn with_inputs(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut host = Self::new();
        host.queue_inputs(lines);
        host
    }

    pub fn queue_input(&mut self, line: impl Into<String>) {
        self.input_queue.push_back(line.into());
    }

    pub fn queue_inputs(&mut self, lines: impl IntoIterator<Item = impl Into<String>>) {
        for line in lines {
            self.queue_input(line);
        }
    }

    pub fn queue_signal(&mut self, signal: Signal) {
        self.signal_queue.push_back(signal);
    }

    pub fn output(&self) -> &[Output] {
        &self.output_buffer
    }

    /// All output text, one entry per line.
    pub fn output_text(&self) -> String {
        self.output_buffer
            .iter()
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn output_with_style(&self, style: OutputStyle) -> Vec<&str> {
        self.output_buffer
            .iter()
            .filter(|o| o.style == style)
            .map(|o| o.text.as_str())
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.output_with_style(OutputStyle::Error)
    }

    /// Every prompt the core asked for, oldest first.
    pub fn prompts(&self) -> &[PromptConfig] {
        &self.prompts
    }

    pub fn last_prompt(&self) -> Option<&PromptConfig> {
        self.prompts.last()
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    pub fn has_pending_input(&self) -> bool {
        !self.input_queue.is_empty()
    }
}

impl IoHost for TestHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        if self.input_queue.is_empty() && self.signal_queue.is_empty() {
            self.pending_eof = true;
        }
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.input_queue.pop_front().map(|line| InputLine { line }))
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        if let Some(signal) = self.signal_queue.pop_front() {
            return Ok(Some(signal));
        }
        if std::mem::take(&mut self.pending_eof) {
            return Ok(Some(Signal::Eof));
        }
        Ok(None)
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        self.output_buffer.push(output);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.prompts.push(config);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        self.flush_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_input_returns_queued_in_order() {
        let mut host = TestHost::with_inputs(["first", "second"]);

        assert_eq!(host.read_input().unwrap().unwrap().line, "first");
        assert_eq!(host.read_input().unwrap().unwrap().line, "second");
        assert!(host.read_input().unwrap().is_none());
    }

    #[test]
    fn signals_come_before_input() {
        let mut host = TestHost::with_inputs(["ls"]);
        host.queue_signal(Signal::Interrupt);

        host.wait_for_input().unwrap();
        assert!(matches!(host.read_signal().unwrap(), Some(Signal::Interrupt)));
        assert!(host.read_signal().unwrap().is_none());
        assert!(host.has_pending_input());
    }

    #[test]
    fn drained_host_reports_eof_once() {
        let mut host = TestHost::new();
        host.wait_for_input().unwrap();
        assert!(matches!(host.read_signal().unwrap(), Some(Signal::Eof)));
        assert!(host.read_signal().unwrap().is_none());
    }

    #[test]
    fn output_is_buffered_with_style() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("ok")).unwrap();
        host.write_output(Output::error("bad")).unwrap();
        host.write_output(Output::info("fyi")).unwrap();

        assert_eq!(host.output().len(), 3);
        assert_eq!(host.errors(), vec!["bad"]);
        assert_eq!(host.output_with_style(OutputStyle::Info), vec!["fyi"]);
        assert_eq!(host.output_text(), "ok\nbad\nfyi");
    }

    #[test]
    fn prompts_are_recorded() {
        let mut host = TestHost::new();
        assert!(host.last_prompt().is_none());

        host.write_prompt(PromptConfig {
            current_path: "/".to_string(),
            entry_count: 0,
        })
        .unwrap();
        host.write_prompt(PromptConfig {
            current_path: "/docs".to_string(),
            entry_count: 2,
        })
        .unwrap();

        assert_eq!(host.prompts().len(), 2);
        let last = host.last_prompt().unwrap();
        assert_eq!(last.current_path, "/docs");
        assert_eq!(last.entry_count, 2);
    }

    #[test]
    fn flush_increments_counter() {
        let mut host = TestHost::new();
        host.flush().unwrap();
        host.flush().unwrap();
        assert_eq!(host.flush_count(), 2);
    }
}
