//! The formatting pass.
//!
//! One pass over the body paragraphs of a document: optionally insert a
//! table-of-contents heading at the top, then classify every paragraph by its
//! style name and rewrite its paragraph and run formatting.

use crate::format::classify::ParagraphKind;
use crate::format::error::{FormatError, Result};
use crate::format::options::{FormatMode, FormattingOptions};
use crate::format::refresh::{NoopRefresher, TocRefresher};
use crate::ooxml::docx::{Document, Indentation, LineSpacing, ParagraphAlignment, ParagraphMut, insert_toc};
use std::path::{Path, PathBuf};

/// Font used for level 1 and level 2 headings.
pub const HEADING_FONT: &str = "Calibri";
/// Text of the inserted table-of-contents heading.
pub const TOC_HEADING_TEXT: &str = "Table of Contents";
/// Style id of the inserted table-of-contents heading.
pub const TOC_HEADING_STYLE_ID: &str = "TOCHeading";
/// Suffix appended to the source file stem.
pub const OUTPUT_SUFFIX: &str = "_Formatted";

/// Space before and after body paragraphs, in points.
const BODY_SPACING_PT: f64 = 6.0;

/// Fixed layout of a heading level.
struct HeadingRule {
    space_before: f64,
    space_after: f64,
    font_size: f64,
}

const TOP_HEADING: HeadingRule = HeadingRule {
    space_before: 24.0,
    space_after: 12.0,
    font_size: 16.0,
};

const SECOND_HEADING: HeadingRule = HeadingRule {
    space_before: 18.0,
    space_after: 6.0,
    font_size: 13.0,
};

/// State of the table of contents after a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocStatus {
    NotRequested,
    /// Field inserted; entries appear once a word processor updates it
    Inserted,
    /// Field inserted and updated by the configured refresher
    Refreshed,
}

/// Paragraph counts by kind for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub top_headings: usize,
    pub second_headings: usize,
    pub other_headings: usize,
    pub body: usize,
}

impl KindCounts {
    fn record(&mut self, kind: ParagraphKind) {
        match kind {
            ParagraphKind::TopHeading => self.top_headings += 1,
            ParagraphKind::SecondHeading => self.second_headings += 1,
            ParagraphKind::OtherHeading => self.other_headings += 1,
            ParagraphKind::Body => self.body += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.top_headings + self.second_headings + self.other_headings + self.body
    }
}

/// What a formatting request produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOutcome {
    pub output_path: PathBuf,
    pub toc: TocStatus,
    /// Body paragraphs in the output document
    pub paragraph_count: usize,
    pub kinds: KindCounts,
    /// Problems that did not stop the request
    pub warnings: Vec<String>,
}

/// Applies [`FormattingOptions`] to documents.
///
/// # Examples
///
/// ```rust,no_run
/// use report_formatter::format::{CommandRefresher, Formatter, FormattingOptions};
///
/// let options = FormattingOptions {
///     font_name: "Arial".to_string(),
///     ..FormattingOptions::default()
/// };
/// let outcome = Formatter::new(options)
///     .with_refresher(CommandRefresher::new("update-toc"))
///     .format_file("report.docx".as_ref())?;
/// println!("wrote {}", outcome.output_path.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Formatter {
    options: FormattingOptions,
    refresher: Box<dyn TocRefresher>,
}

impl Formatter {
    /// A formatter that leaves the TOC field for the reader to update.
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            refresher: Box::new(NoopRefresher),
        }
    }

    /// Use `refresher` to update the TOC after saving.
    pub fn with_refresher(mut self, refresher: impl TocRefresher + 'static) -> Self {
        self.refresher = Box::new(refresher);
        self
    }

    pub fn with_boxed_refresher(mut self, refresher: Box<dyn TocRefresher>) -> Self {
        self.refresher = refresher;
        self
    }

    #[inline]
    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }

    /// Run the formatting pass on an open document.
    ///
    /// Each paragraph present after the optional TOC insertion is visited
    /// exactly once. Running the pass twice inserts a second TOC heading.
    pub fn format_document(&self, doc: &mut Document) -> Result<KindCounts> {
        if self.options.insert_toc {
            let mut heading =
                doc.insert_paragraph_before_first(TOC_HEADING_TEXT, Some(TOC_HEADING_STYLE_ID))?;
            heading.set_alignment(ParagraphAlignment::Left);
            insert_toc(&mut heading);
            log::debug!("Inserted table of contents heading");
        }

        let mut kinds = KindCounts::default();
        for mut paragraph in doc.paragraphs_mut() {
            let kind = ParagraphKind::classify(paragraph.style_name());
            match kind {
                ParagraphKind::TopHeading => self.format_top_heading(&mut paragraph),
                ParagraphKind::SecondHeading => self.format_second_heading(&mut paragraph),
                ParagraphKind::OtherHeading => self.format_other_heading(&mut paragraph),
                ParagraphKind::Body => self.format_body(&mut paragraph),
            }
            kinds.record(kind);
        }

        log::debug!(
            "Formatted {} paragraphs ({} top headings, {} second headings, {} other headings, {} body)",
            kinds.total(),
            kinds.top_headings,
            kinds.second_headings,
            kinds.other_headings,
            kinds.body
        );
        Ok(kinds)
    }

    fn apply_heading_layout(paragraph: &mut ParagraphMut<'_>, rule: &HeadingRule) {
        paragraph.set_indentation(Indentation::ZERO);
        paragraph.set_space_before(rule.space_before);
        paragraph.set_space_after(rule.space_after);
        paragraph.set_alignment(ParagraphAlignment::Left);
    }

    fn format_top_heading(&self, paragraph: &mut ParagraphMut<'_>) {
        Self::apply_heading_layout(paragraph, &TOP_HEADING);
        if self.options.bold_headings {
            for mut run in paragraph.runs_mut() {
                run.set_bold(true);
                run.set_font_name(HEADING_FONT);
                run.set_font_size(TOP_HEADING.font_size);
                run.uppercase_text();
            }
        }
        if self.options.page_break_before_top_headings {
            paragraph.set_page_break_before(true);
        }
    }

    fn format_second_heading(&self, paragraph: &mut ParagraphMut<'_>) {
        Self::apply_heading_layout(paragraph, &SECOND_HEADING);
        if self.options.bold_headings {
            for mut run in paragraph.runs_mut() {
                run.set_bold(true);
                run.set_small_caps(true);
                run.set_font_name(HEADING_FONT);
                run.set_font_size(SECOND_HEADING.font_size);
            }
        }
    }

    /// Lower-level headings only get bold runs; their layout is left alone.
    fn format_other_heading(&self, paragraph: &mut ParagraphMut<'_>) {
        if self.options.bold_headings {
            for mut run in paragraph.runs_mut() {
                run.set_bold(true);
            }
        }
    }

    fn format_body(&self, paragraph: &mut ParagraphMut<'_>) {
        let font_size = f64::from(self.options.font_size);
        for mut run in paragraph.runs_mut() {
            run.set_font_name(&self.options.font_name);
            run.set_font_size(font_size);
        }
        paragraph.set_alignment(if self.options.justify_paragraphs {
            ParagraphAlignment::Justify
        } else {
            ParagraphAlignment::Left
        });
        paragraph.set_line_spacing(LineSpacing::Multiple(self.options.line_spacing.multiplier()));
        paragraph.set_space_before(BODY_SPACING_PT);
        paragraph.set_space_after(BODY_SPACING_PT);
        paragraph.set_keep_together(true);
    }

    /// Format `source` and save the result next to it as `<stem>_Formatted.<ext>`.
    ///
    /// Document errors are returned. A failed TOC refresh is logged and
    /// reported in [`FormatOutcome::warnings`].
    pub fn format_file(&self, source: &Path) -> Result<FormatOutcome> {
        self.options.validate()?;
        let output_path = output_path_for(source)?;
        log::info!("Formatting {} -> {}", source.display(), output_path.display());

        let mut doc = Document::open(source)?;
        let kinds = self.format_document(&mut doc)?;
        doc.save(&output_path)?;

        let mut warnings = Vec::new();
        let toc = if !self.options.insert_toc {
            TocStatus::NotRequested
        } else if !self.refresher.is_available() {
            log::debug!("No TOC refresher configured; the field updates when the document is opened");
            TocStatus::Inserted
        } else {
            match self.refresher.refresh_toc(&output_path) {
                Ok(()) => TocStatus::Refreshed,
                Err(e) => {
                    log::warn!("Table of contents inserted but not refreshed: {}", e);
                    warnings.push(format!("TOC refresh failed: {}", e));
                    TocStatus::Inserted
                },
            }
        };

        Ok(FormatOutcome {
            output_path,
            toc,
            paragraph_count: kinds.total(),
            kinds,
            warnings,
        })
    }
}

/// Derive the output path: `dir/report.docx` becomes `dir/report_Formatted.docx`.
///
/// Only the file stem changes, so a `.docx` elsewhere in the path is left alone.
pub fn output_path_for(source: &Path) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .ok_or_else(|| FormatError::InvalidSourcePath(source.to_path_buf()))?;
    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(source.with_file_name(name))
}

/// Handle a formatting request in either mode.
///
/// Template mode is rejected before the source is touched.
pub fn apply_formatting(
    source: &Path,
    mode: &FormatMode,
    refresher: Box<dyn TocRefresher>,
) -> Result<FormatOutcome> {
    match mode {
        FormatMode::Template { template: None } => Err(FormatError::MissingTemplate),
        FormatMode::Template {
            template: Some(template),
        } => Err(FormatError::TemplateNotImplemented(template.clone())),
        FormatMode::Options(options) => Formatter::new(options.clone())
            .with_boxed_refresher(refresher)
            .format_file(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::error::RefreshError;
    use crate::format::options::LineSpacingChoice;
    use crate::ooxml::docx::testing::DocxBuilder;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample() -> DocxBuilder {
        DocxBuilder::new()
            .paragraph("Heading1", "Introduction")
            .paragraph_runs(Some("Normal"), &["First ", "body"])
            .paragraph("Heading2", "Scope")
            .paragraph("Heading3", "Detail")
            .paragraph_runs(None, &["Second body"])
    }

    fn format(builder: DocxBuilder, options: FormattingOptions) -> (Document, KindCounts) {
        let mut doc = Document::from_bytes(builder.build()).unwrap();
        let kinds = Formatter::new(options).format_document(&mut doc).unwrap();
        (doc, kinds)
    }

    fn no_toc() -> FormattingOptions {
        FormattingOptions {
            insert_toc: false,
            ..FormattingOptions::default()
        }
    }

    struct FailingRefresher;

    impl TocRefresher for FailingRefresher {
        fn refresh_toc(&self, _path: &Path) -> std::result::Result<(), RefreshError> {
            Err(RefreshError::Spawn {
                program: "soffice".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no office suite"),
            })
        }
    }

    #[derive(Clone, Default)]
    struct RecordingRefresher {
        calls: Rc<RefCell<Vec<PathBuf>>>,
    }

    impl TocRefresher for RecordingRefresher {
        fn refresh_toc(&self, path: &Path) -> std::result::Result<(), RefreshError> {
            self.calls.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_toc_heading_inserted_first() {
        let (doc, kinds) = format(sample(), FormattingOptions::default());
        let paras = doc.paragraphs();
        assert_eq!(paras.len(), 6);
        assert_eq!(kinds.total(), 6);

        let toc = &paras[0];
        assert_eq!(toc.text(), TOC_HEADING_TEXT);
        assert_eq!(toc.style_id().as_deref(), Some(TOC_HEADING_STYLE_ID));
        assert_eq!(toc.alignment(), Some(ParagraphAlignment::Left));

        let runs = toc.runs();
        assert_eq!(runs.len(), 5);
        let xml: Vec<String> = runs[1..].iter().map(|r| r.element().to_xml_string()).collect();
        assert!(xml[0].contains(r#"w:fldCharType="begin""#));
        assert_eq!(
            runs[2].element().child("w:instrText").unwrap().text(),
            r#"TOC \o "1-3" \h \z \u"#
        );
        assert!(xml[2].contains(r#"w:fldCharType="separate""#));
        assert!(xml[3].contains(r#"w:fldCharType="end""#));

        // The TOC heading is a lower-level heading: bold, layout from its style.
        assert_eq!(ParagraphKind::classify(toc.style_name()), ParagraphKind::OtherHeading);
        assert!(runs.iter().all(|run| run.bold() == Some(true)));
        assert_eq!(toc.space_before(), None);
        assert_eq!(kinds.other_headings, 2);
    }

    #[test]
    fn test_top_heading_upper_cased_and_bold() {
        let builder = DocxBuilder::new()
            .paragraph_runs(Some("Heading1"), &["Project ", "overview"])
            .paragraph("Normal", "text");
        let (doc, _) = format(builder, no_toc());
        let heading = &doc.paragraphs()[0];

        assert_eq!(heading.text(), "Project overview".to_uppercase());
        assert_eq!(heading.runs().len(), 2);
        for run in heading.runs() {
            assert_eq!(run.bold(), Some(true));
            assert_eq!(run.font_name().as_deref(), Some(HEADING_FONT));
            assert_eq!(run.font_size(), Some(16.0));
        }
        assert!(heading.page_break_before());
        assert_eq!(heading.space_before(), Some(24.0));
        assert_eq!(heading.space_after(), Some(12.0));
        assert_eq!(heading.alignment(), Some(ParagraphAlignment::Left));
        assert_eq!(heading.indentation(), Indentation::ZERO);
    }

    #[test]
    fn test_headings_without_bold_or_page_breaks() {
        let options = FormattingOptions {
            bold_headings: false,
            page_break_before_top_headings: false,
            ..no_toc()
        };
        let (doc, _) = format(sample(), options);
        let paras = doc.paragraphs();

        assert_eq!(paras[0].text(), "Introduction");
        assert_eq!(paras[0].runs()[0].bold(), None);
        assert!(!paras[0].page_break_before());
        assert_eq!(paras[0].space_before(), Some(24.0));

        assert_eq!(paras[2].runs()[0].small_caps(), None);
        assert_eq!(paras[2].space_after(), Some(6.0));
    }

    #[test]
    fn test_second_heading_small_caps() {
        let (doc, _) = format(sample(), no_toc());
        let heading = &doc.paragraphs()[2];

        assert_eq!(heading.text(), "Scope");
        let run = heading.runs()[0];
        assert_eq!(run.bold(), Some(true));
        assert_eq!(run.small_caps(), Some(true));
        assert_eq!(run.font_name().as_deref(), Some(HEADING_FONT));
        assert_eq!(run.font_size(), Some(13.0));
        assert!(!heading.page_break_before());
        assert_eq!(heading.space_before(), Some(18.0));
        assert_eq!(heading.space_after(), Some(6.0));
    }

    #[test]
    fn test_other_heading_only_bolded() {
        let builder = DocxBuilder::new().paragraph_runs(Some("Heading3"), &["Detail ", "notes"]);
        let (doc, kinds) = format(builder, no_toc());
        assert_eq!(kinds.other_headings, 1);

        let heading = &doc.paragraphs()[0];
        assert_eq!(heading.text(), "Detail notes");
        for run in heading.runs() {
            assert_eq!(run.bold(), Some(true));
            assert_eq!(run.font_name(), None);
            assert_eq!(run.font_size(), None);
            assert_eq!(run.small_caps(), None);
        }
        assert_eq!(heading.space_before(), None);
        assert_eq!(heading.space_after(), None);
        assert_eq!(heading.alignment(), None);
        assert!(!heading.page_break_before());
    }

    #[test]
    fn test_other_heading_untouched_without_bold() {
        let options = FormattingOptions {
            bold_headings: false,
            ..no_toc()
        };
        let builder = DocxBuilder::new().paragraph("Heading3", "Detail");
        let original = Document::from_bytes(builder.build()).unwrap().to_xml_bytes();

        let builder = DocxBuilder::new().paragraph("Heading3", "Detail");
        let (doc, _) = format(builder, options);
        assert_eq!(doc.to_xml_bytes(), original);
    }

    #[test]
    fn test_body_formatting() {
        let options = FormattingOptions {
            font_name: "Times New Roman".to_string(),
            font_size: 12,
            justify_paragraphs: false,
            line_spacing: LineSpacingChoice::OnePointFive,
            ..no_toc()
        };
        let (doc, kinds) = format(sample(), options);
        assert_eq!(kinds.body, 2);

        for index in [1, 4] {
            let para = &doc.paragraphs()[index];
            for run in para.runs() {
                assert_eq!(run.font_name().as_deref(), Some("Times New Roman"));
                assert_eq!(run.font_size(), Some(12.0));
            }
            assert_eq!(para.alignment(), Some(ParagraphAlignment::Left));
            assert_eq!(para.line_spacing().and_then(|l| l.multiple()), Some(1.5));
            assert_eq!(para.space_before(), Some(6.0));
            assert_eq!(para.space_after(), Some(6.0));
            assert!(para.keep_together());
        }
    }

    #[test]
    fn test_body_justified_double_spaced() {
        let options = FormattingOptions {
            line_spacing: LineSpacingChoice::Double,
            ..no_toc()
        };
        let (doc, _) = format(sample(), options);
        let para = &doc.paragraphs()[1];
        assert_eq!(para.alignment(), Some(ParagraphAlignment::Justify));
        assert_eq!(para.line_spacing(), Some(LineSpacing::Multiple(2.0)));
        assert_eq!(para.runs()[0].font_name().as_deref(), Some("Calibri"));
        assert_eq!(para.runs()[0].font_size(), Some(11.0));
    }

    #[test]
    fn test_empty_document_gets_toc() {
        let (doc, kinds) = format(DocxBuilder::new(), FormattingOptions::default());
        assert_eq!(doc.paragraph_count(), 1);
        assert_eq!(kinds.other_headings, 1);
        assert_eq!(doc.paragraphs()[0].text(), TOC_HEADING_TEXT);
    }

    #[test]
    fn test_formatting_twice_adds_second_toc_heading() {
        let dir = tempfile::tempdir().unwrap();
        let source = sample().write_to(dir.path(), "report.docx");

        let formatter = Formatter::new(FormattingOptions::default());
        let first = formatter.format_file(&source).unwrap();
        let second = formatter.format_file(&first.output_path).unwrap();
        assert_eq!(second.output_path, dir.path().join("report_Formatted_Formatted.docx"));

        let doc = Document::open(&second.output_path).unwrap();
        let toc_headings = doc
            .paragraphs()
            .iter()
            .filter(|p| p.text() == TOC_HEADING_TEXT)
            .count();
        assert_eq!(toc_headings, 2);
        assert_eq!(doc.paragraph_count(), 7);
        assert_eq!(doc.paragraphs()[2].text(), "INTRODUCTION");
    }

    #[test]
    fn test_format_file_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = sample().write_to(dir.path(), "report.docx");
        let before = std::fs::read(&source).unwrap();

        let outcome = Formatter::new(FormattingOptions::default()).format_file(&source).unwrap();
        assert_eq!(outcome.output_path, dir.path().join("report_Formatted.docx"));
        assert_eq!(outcome.toc, TocStatus::Inserted);
        assert_eq!(outcome.paragraph_count, 6);
        assert!(outcome.warnings.is_empty());
        assert!(outcome.output_path.exists());

        assert_eq!(std::fs::read(&source).unwrap(), before);
        assert_eq!(Document::open(&outcome.output_path).unwrap().paragraph_count(), 6);
    }

    #[test]
    fn test_refresh_failure_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let source = sample().write_to(dir.path(), "report.docx");

        let outcome = Formatter::new(FormattingOptions::default())
            .with_refresher(FailingRefresher)
            .format_file(&source)
            .unwrap();
        assert_eq!(outcome.toc, TocStatus::Inserted);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("no office suite"));
        assert!(Document::open(&outcome.output_path).is_ok());
    }

    #[test]
    fn test_refresher_called_with_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = sample().write_to(dir.path(), "report.docx");
        let refresher = RecordingRefresher::default();

        let outcome = Formatter::new(FormattingOptions::default())
            .with_refresher(refresher.clone())
            .format_file(&source)
            .unwrap();
        assert_eq!(outcome.toc, TocStatus::Refreshed);
        assert_eq!(*refresher.calls.borrow(), [outcome.output_path.clone()]);
    }

    #[test]
    fn test_refresher_skipped_without_toc() {
        let dir = tempfile::tempdir().unwrap();
        let source = sample().write_to(dir.path(), "report.docx");
        let refresher = RecordingRefresher::default();

        let outcome = Formatter::new(no_toc())
            .with_refresher(refresher.clone())
            .format_file(&source)
            .unwrap();
        assert_eq!(outcome.toc, TocStatus::NotRequested);
        assert_eq!(outcome.paragraph_count, 5);
        assert!(refresher.calls.borrow().is_empty());
    }

    #[test]
    fn test_malformed_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.docx");
        std::fs::write(&source, b"not a zip archive").unwrap();

        let result = Formatter::new(FormattingOptions::default()).format_file(&source);
        assert!(matches!(result, Err(FormatError::Document(_))));
        assert!(!dir.path().join("broken_Formatted.docx").exists());
    }

    #[test]
    fn test_invalid_options_rejected_before_reading() {
        let options = FormattingOptions {
            font_size: 30,
            ..FormattingOptions::default()
        };
        let result = Formatter::new(options).format_file(Path::new("/nonexistent/report.docx"));
        assert!(matches!(result, Err(FormatError::InvalidOptions(_))));
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("/data/report.docx")).unwrap(),
            PathBuf::from("/data/report_Formatted.docx")
        );
        assert_eq!(
            output_path_for(Path::new("drafts.docx/q3.final.docx")).unwrap(),
            PathBuf::from("drafts.docx/q3.final_Formatted.docx")
        );
        assert_eq!(
            output_path_for(Path::new("notes")).unwrap(),
            PathBuf::from("notes_Formatted")
        );
        assert!(matches!(
            output_path_for(Path::new("/")),
            Err(FormatError::InvalidSourcePath(_))
        ));
    }

    #[test]
    fn test_template_mode_rejected_before_reading() {
        let missing = Path::new("/nonexistent/report.docx");

        let result = apply_formatting(missing, &FormatMode::Template { template: None }, Box::new(NoopRefresher));
        assert!(matches!(result, Err(FormatError::MissingTemplate)));

        let mode = FormatMode::Template {
            template: Some(PathBuf::from("corporate.dotx")),
        };
        let result = apply_formatting(missing, &mode, Box::new(NoopRefresher));
        assert!(matches!(result, Err(FormatError::TemplateNotImplemented(_))));
    }

    #[test]
    fn test_options_mode_formats() {
        let dir = tempfile::tempdir().unwrap();
        let source = sample().write_to(dir.path(), "report.docx");
        let outcome = apply_formatting(&source, &FormatMode::default(), Box::new(NoopRefresher)).unwrap();
        assert_eq!(outcome.paragraph_count, 6);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_paragraph_count_grows_only_with_toc(
            styles in prop::collection::vec(
                prop::sample::select(vec!["Normal", "Heading1", "Heading2", "Heading3", "Title"]),
                0..12,
            ),
            insert_toc in any::<bool>(),
        ) {
            let mut builder = DocxBuilder::new();
            for (index, style) in styles.iter().enumerate() {
                builder = builder.paragraph(style, &format!("Paragraph {index}"));
            }
            let options = FormattingOptions { insert_toc, ..FormattingOptions::default() };
            let (doc, kinds) = format(builder, options);

            let expected = styles.len() + usize::from(insert_toc);
            prop_assert_eq!(doc.paragraph_count(), expected);
            prop_assert_eq!(kinds.total(), expected);
        }
    }
}
