//! Report builder: groups shapes by kind and renders the localized summary.
//!
//! Groups appear in the order their kind is first seen in the input, so
//! `[circle, square, circle]` renders the circle line before the square line.

use crate::i18n::{I18nError, IntoLanguage, Language, TranslationKey};
use crate::shapes::{Shape, ShapeError, ShapeKind};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::debug;

/// Failure to build or render a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error(transparent)]
    Translation(#[from] I18nError),

    #[error(transparent)]
    Geometry(#[from] ShapeError),

    /// The overall sums exceed the range of `Decimal`.
    #[error("Arithmetic overflow computing report totals")]
    TotalsOverflow,
}

/// Aggregate of all shapes of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: ShapeKind,
    pub count: usize,
    pub area: Decimal,
    pub perimeter: Decimal,
}

impl ReportLine {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            count: 0,
            area: Decimal::ZERO,
            perimeter: Decimal::ZERO,
        }
    }

    fn add(&mut self, shape: &Shape) -> Result<(), ShapeError> {
        let overflow = ShapeError::Overflow { kind: self.kind };
        self.area = self.area.checked_add(shape.area()?).ok_or(overflow)?;
        self.perimeter = self
            .perimeter
            .checked_add(shape.perimeter()?)
            .ok_or(overflow)?;
        self.count += 1;
        Ok(())
    }

    /// Localized name of this group, singular or plural by `count`.
    pub fn localized_name(&self, language: impl IntoLanguage) -> Result<&'static str, I18nError> {
        self.kind.localized_name(self.count, language)
    }

    fn render(&self, language: Language) -> Result<String, I18nError> {
        Ok(format!(
            "{} {} | {} {} | {} {} <br/>",
            self.count,
            self.localized_name(language)?,
            language.translate(TranslationKey::Area)?,
            format_decimal(self.area),
            language.translate(TranslationKey::Perimeter)?,
            format_decimal(self.perimeter),
        ))
    }
}

/// Sums across every group. Computed from unrounded group sums.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTotals {
    pub count: usize,
    pub area: Decimal,
    pub perimeter: Decimal,
}

/// Grouped, language-independent view of a shape list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeReport {
    pub lines: Vec<ReportLine>,
    pub totals: ReportTotals,
}

impl ShapeReport {
    /// Group `shapes` by kind and compute per-kind and overall sums.
    pub fn build(shapes: &[Shape]) -> Result<Self, ReportError> {
        let mut lines: Vec<ReportLine> = Vec::new();

        for shape in shapes {
            let kind = shape.kind();
            match lines.iter_mut().find(|line| line.kind == kind) {
                Some(line) => line.add(shape)?,
                None => {
                    let mut line = ReportLine::new(kind);
                    line.add(shape)?;
                    lines.push(line);
                }
            }
        }

        let mut totals = ReportTotals::default();
        for line in &lines {
            totals.count += line.count;
            totals.area = totals
                .area
                .checked_add(line.area)
                .ok_or(ReportError::TotalsOverflow)?;
            totals.perimeter = totals
                .perimeter
                .checked_add(line.perimeter)
                .ok_or(ReportError::TotalsOverflow)?;
        }

        Ok(Self { lines, totals })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the report as lightweight HTML in `language`.
    pub fn render(&self, language: impl IntoLanguage) -> Result<String, I18nError> {
        let language = language.into_language()?;

        if self.is_empty() {
            return Ok(format!(
                "<h1>{}</h1>",
                language.translate(TranslationKey::EmptyListHeader)?
            ));
        }

        let mut output = format!(
            "<h1>{}</h1>",
            language.translate(TranslationKey::ShapesReportHeader)?
        );

        for line in &self.lines {
            debug!(
                kind = ?line.kind,
                count = line.count,
                language = language.code(),
                "Rendering report line"
            );
            output.push_str(&line.render(language)?);
        }

        output.push_str(&format!(
            "{}:<br/>{} {} {} {} {} {}",
            language.translate(TranslationKey::Total)?,
            self.totals.count,
            language.translate(TranslationKey::Shapes)?,
            language.translate(TranslationKey::Perimeter)?,
            format_decimal(self.totals.perimeter),
            language.translate(TranslationKey::Area)?,
            format_decimal(self.totals.area),
        ));

        Ok(output)
    }
}

/// Render the summary report of `shapes` in `language`.
///
/// An unsupported language is reported before any geometry is computed.
///
/// # Example
/// ```
/// use rust_decimal_macros::dec;
/// use shape_report::{render, Shape};
///
/// let report = render(&[Shape::square(dec!(2))], "en").unwrap();
/// assert_eq!(
///     report,
///     "<h1>Shapes report</h1>1 Square | Area 4 | Perimeter 8 <br/>TOTAL:<br/>1 shapes Perimeter 8 Area 4"
/// );
/// ```
pub fn render(shapes: &[Shape], language: impl IntoLanguage) -> Result<String, ReportError> {
    let language = language.into_language()?;
    debug!(shapes = shapes.len(), language = language.code(), "Building shape report");
    Ok(ShapeReport::build(shapes)?.render(language)?)
}

/// Format a decimal with at most two decimal places.
///
/// Midpoints round away from zero; trailing zeros and a trailing point are
/// dropped (`4.00` -> `4`, `2.50` -> `2.5`). Zero renders as `0`.
pub fn format_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return "0".to_string();
    }
    rounded.normalize().to_string()
}
