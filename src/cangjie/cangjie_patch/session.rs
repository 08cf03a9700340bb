use std::io::{BufRead, Write};

use crate::cangjie::cangjie_patch::{ArrayPatcher, BatchCandidates, PatchReport, Replacement};
use crate::cangjie::CangjieError;

const SAMPLE_ELEMENTS_LENGTH: usize = 5;
const PREVIEW_LINES_LENGTH: usize = 10;
const PREVIEW_LINE_WIDTH: usize = 80;
const PREVIEW_ELLIPSIS: &str = "...";
const RULE_WIDTH: usize = 50;

/// 対話入力。 test では `Cursor` と `Vec<u8>` を渡す。
pub(in crate::cangjie) struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(in crate::cangjie) const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 入力の前後の空白は除く。 EOF は空文字列。
    pub(in crate::cangjie) fn ask(&mut self, message: &str) -> Result<String, CangjieError> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;
        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;
        Ok(String::from(answer.trim()))
    }

    pub(in crate::cangjie) fn say(&mut self, message: &str) -> Result<(), CangjieError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    #[cfg(test)]
    pub(in crate::cangjie) fn into_writer(self) -> W {
        self.writer
    }
}

pub(in crate::cangjie) struct PatchSession<R, W> {
    prompt: Prompt<R, W>,
    patcher: ArrayPatcher,
}

impl<R: BufRead, W: Write> PatchSession<R, W> {
    pub(in crate::cangjie) const fn new(prompt: Prompt<R, W>, patcher: ArrayPatcher) -> Self {
        Self { prompt, patcher }
    }

    #[cfg(test)]
    pub(in crate::cangjie) fn into_writer(self) -> W {
        self.prompt.into_writer()
    }

    pub(in crate::cangjie) fn run(&mut self) -> Result<(), CangjieError> {
        self.prompt.say("Select operation:")?;
        self.prompt.say("1. single file")?;
        self.prompt.say("2. batch process directory")?;
        let choice = self.prompt.ask("\nEnter option (1-2): ")?;
        match choice.as_str() {
            "1" => self.run_single(),
            "2" => self.run_batch(),
            _ => Err(CangjieError::Selection(format!(
                r#"invalid option "{}""#,
                choice
            ))),
        }
    }

    pub(in crate::cangjie) fn run_single(&mut self) -> Result<(), CangjieError> {
        let rule = "=".repeat(RULE_WIDTH);
        let array_name = String::from(self.patcher.get_array_name());
        self.prompt.say("Script array replacement tool")?;
        self.prompt.say(&rule)?;
        self.prompt.say(&format!(
            "Fill the {} array of the first script file with the array of the second script file",
            array_name
        ))?;
        self.prompt.say(&rule)?;
        let template_full_path = self.ask_full_path(
            &format!(
                "Enter the first script file path (containing the {} array): ",
                array_name
            ),
            "TEMPLATE",
        )?;
        let data_full_path = self.ask_full_path(
            "Enter the second script file path (containing the array data): ",
            "DATA",
        )?;
        self.prompt.say("\nProcessing...")?;
        self.prompt
            .say(&format!("Template file: {}", template_full_path))?;
        self.prompt.say(&format!("Data file: {}", data_full_path))?;
        let report = self
            .patcher
            .patch_file(&template_full_path, &data_full_path)?;
        self.print_report(&template_full_path, &report)?;
        self.prompt.say(&format!("\n{}", rule))?;
        self.prompt.say("Replacement succeeded")?;
        self.prompt.say(&format!(
            "  Original file backed up to: {}",
            report.backup_full_path
        ))?;
        self.prompt
            .say(&format!("  New file: {}", template_full_path))?;
        self.prompt.say(&format!(
            "  Replaced {} array elements",
            report.extracted.elements.len()
        ))?;
        self.prompt.say("\nNew file preview:")?;
        for line in Self::format_preview(&report.patched_content) {
            self.prompt.say(&line)?;
        }
        Ok(())
    }

    pub(in crate::cangjie) fn run_batch(&mut self) -> Result<(), CangjieError> {
        self.prompt.say("\nBatch process mode")?;
        self.prompt.say(&"-".repeat(RULE_WIDTH))?;
        let template_directory = self
            .prompt
            .ask("Enter the directory containing the template script files: ")?;
        let data_directory = self
            .prompt
            .ask("Enter the directory containing the data script files: ")?;
        let candidates = BatchCandidates::scan(&template_directory, &data_directory)?;
        self.print_numbered("template", &candidates.template_filenames)?;
        self.print_numbered("data", &candidates.data_filenames)?;
        if candidates.is_empty() {
            return Err(candidates.to_no_candidates_error());
        }
        let template_number = self.ask_selection("template", candidates.template_filenames.len())?;
        let data_number = self.ask_selection("data", candidates.data_filenames.len())?;
        let (template_full_path, data_full_path) =
            candidates.select(template_number, data_number)?;
        self.prompt.say("\nProcessing files:")?;
        self.prompt
            .say(&format!("  Template: {}", template_full_path))?;
        self.prompt.say(&format!("  Data: {}", data_full_path))?;
        let confirm = self.prompt.ask("\nConfirm? (y/n): ")?;
        if !confirm.eq_ignore_ascii_case("y") {
            self.prompt.say("Cancelled")?;
            return Ok(());
        }
        let report = self
            .patcher
            .patch_file(&template_full_path, &data_full_path)?;
        self.print_report(&template_full_path, &report)?;
        self.prompt.say("Batch process complete")?;
        Ok(())
    }

    fn ask_full_path(
        &mut self,
        message: &str,
        name: &'static str,
    ) -> Result<String, CangjieError> {
        let full_path = self.prompt.ask(message)?;
        if full_path.is_empty() {
            return Err(CangjieError::MissingArgument(name));
        }
        Ok(full_path)
    }

    fn ask_selection(&mut self, kind: &str, length: usize) -> Result<usize, CangjieError> {
        let answer = self
            .prompt
            .ask(&format!("Select {} file (1-{}): ", kind, length))?;
        BatchCandidates::parse_selection(&answer, length)
    }

    fn print_numbered(&mut self, kind: &str, filenames: &[String]) -> Result<(), CangjieError> {
        self.prompt
            .say(&format!("\nFound {} {} files:", filenames.len(), kind))?;
        for (i, filename) in filenames.iter().enumerate() {
            self.prompt.say(&format!("  {}. {}", i + 1, filename))?;
        }
        Ok(())
    }

    fn print_report(
        &mut self,
        template_full_path: &str,
        report: &PatchReport,
    ) -> Result<(), CangjieError> {
        let elements = &report.extracted.elements;
        self.prompt.say(&format!(
            "\nExtracted {} elements ({:?})",
            elements.len(),
            report.extracted.strategy
        ))?;
        self.prompt.say(&format!(
            "  First {} elements:",
            SAMPLE_ELEMENTS_LENGTH.min(elements.len())
        ))?;
        for (i, element) in elements.iter().take(SAMPLE_ELEMENTS_LENGTH).enumerate() {
            self.prompt.say(&format!("    {}. {}", i + 1, element))?;
        }
        self.prompt.say(&format!(
            "Backup file created: {}",
            report.backup_full_path
        ))?;
        match report.replacement {
            Replacement::Declaration(declaration) => self.prompt.say(&format!(
                "Replaced the {} array of {} ({})",
                self.patcher.get_array_name(),
                template_full_path,
                declaration
            ))?,
            Replacement::Appended => self.prompt.say(&format!(
                "Warning: {} array declaration not found, appended to the end of {}",
                self.patcher.get_array_name(),
                template_full_path
            ))?,
        }
        Ok(())
    }

    /// 先頭 `PREVIEW_LINES_LENGTH` 行。長い行は文字数で切り詰める。
    pub(in crate::cangjie) fn format_preview(content: &str) -> Vec<String> {
        let lines = content.lines().collect::<Vec<&str>>();
        let mut result = lines
            .iter()
            .take(PREVIEW_LINES_LENGTH)
            .enumerate()
            .map(|(i, line)| format!("  {:2}: {}", i + 1, Self::truncate_line(line.trim_end())))
            .collect::<Vec<String>>();
        if lines.len() > PREVIEW_LINES_LENGTH {
            result.push(format!(
                "  ... {} more lines",
                lines.len() - PREVIEW_LINES_LENGTH
            ));
        }
        result
    }

    fn truncate_line(line: &str) -> String {
        if line.chars().count() > PREVIEW_LINE_WIDTH {
            let mut truncated = line
                .chars()
                .take(PREVIEW_LINE_WIDTH - PREVIEW_ELLIPSIS.len())
                .collect::<String>();
            truncated.push_str(PREVIEW_ELLIPSIS);
            truncated
        } else {
            String::from(line)
        }
    }
}
