use crate::i18n::I18nError;

/// Every key a report can ask the catalog for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    SquareSingular,
    SquarePlural,
    CircleSingular,
    CirclePlural,
    TriangleSingular,
    TrianglePlural,
    TrapezoidSingular,
    TrapezoidPlural,
    Area,
    Perimeter,
    Total,
    Shapes,
    EmptyListHeader,
    ShapesReportHeader,
}

impl TranslationKey {
    /// All keys, in declaration order.
    pub const ALL: [TranslationKey; 14] = [
        TranslationKey::SquareSingular,
        TranslationKey::SquarePlural,
        TranslationKey::CircleSingular,
        TranslationKey::CirclePlural,
        TranslationKey::TriangleSingular,
        TranslationKey::TrianglePlural,
        TranslationKey::TrapezoidSingular,
        TranslationKey::TrapezoidPlural,
        TranslationKey::Area,
        TranslationKey::Perimeter,
        TranslationKey::Total,
        TranslationKey::Shapes,
        TranslationKey::EmptyListHeader,
        TranslationKey::ShapesReportHeader,
    ];

    /// Stable resource name of the key (e.g. "SquarePlural").
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationKey::SquareSingular => "SquareSingular",
            TranslationKey::SquarePlural => "SquarePlural",
            TranslationKey::CircleSingular => "CircleSingular",
            TranslationKey::CirclePlural => "CirclePlural",
            TranslationKey::TriangleSingular => "TriangleSingular",
            TranslationKey::TrianglePlural => "TrianglePlural",
            TranslationKey::TrapezoidSingular => "TrapezoidSingular",
            TranslationKey::TrapezoidPlural => "TrapezoidPlural",
            TranslationKey::Area => "Area",
            TranslationKey::Perimeter => "Perimeter",
            TranslationKey::Total => "Total",
            TranslationKey::Shapes => "Shapes",
            TranslationKey::EmptyListHeader => "EmptyListHeader",
            TranslationKey::ShapesReportHeader => "ShapesReportHeader",
        }
    }

    /// Look a key up by its resource name.
    pub fn from_name(name: &str) -> Option<TranslationKey> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// All localized report strings for a language.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Shape Names ====================
    pub square_singular: &'static str,
    pub square_plural: &'static str,
    pub circle_singular: &'static str,
    pub circle_plural: &'static str,
    pub triangle_singular: &'static str,
    pub triangle_plural: &'static str,
    pub trapezoid_singular: &'static str,
    pub trapezoid_plural: &'static str,

    // ==================== Report Labels ====================
    pub area: &'static str,
    pub perimeter: &'static str,
    /// Label of the totals block, rendered followed by ":<br/>"
    pub total: &'static str,
    /// Noun used after the overall shape count (e.g. "7 shapes")
    pub shapes: &'static str,

    // ==================== Headers ====================
    /// Header shown when the shape list is empty
    pub empty_list_header: &'static str,
    /// Header shown above a non-empty report
    pub shapes_report_header: &'static str,
}

impl LanguageStrings {
    /// Raw table entry for a key. May be empty if the table is incomplete.
    pub fn raw(&self, key: TranslationKey) -> &'static str {
        match key {
            TranslationKey::SquareSingular => self.square_singular,
            TranslationKey::SquarePlural => self.square_plural,
            TranslationKey::CircleSingular => self.circle_singular,
            TranslationKey::CirclePlural => self.circle_plural,
            TranslationKey::TriangleSingular => self.triangle_singular,
            TranslationKey::TrianglePlural => self.triangle_plural,
            TranslationKey::TrapezoidSingular => self.trapezoid_singular,
            TranslationKey::TrapezoidPlural => self.trapezoid_plural,
            TranslationKey::Area => self.area,
            TranslationKey::Perimeter => self.perimeter,
            TranslationKey::Total => self.total,
            TranslationKey::Shapes => self.shapes,
            TranslationKey::EmptyListHeader => self.empty_list_header,
            TranslationKey::ShapesReportHeader => self.shapes_report_header,
        }
    }

    /// Resolve a key, treating an empty entry as missing.
    ///
    /// `language` is only used to label the error.
    pub fn get(
        &self,
        key: TranslationKey,
        language: &'static str,
    ) -> Result<&'static str, I18nError> {
        match self.raw(key) {
            text if text.trim().is_empty() => Err(I18nError::MissingTranslationKey {
                key: key.as_str(),
                language,
            }),
            text => Ok(text),
        }
    }
}

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    square_singular: "Cuadrado",
    square_plural: "Cuadrados",
    circle_singular: "Círculo",
    circle_plural: "Círculos",
    triangle_singular: "Triángulo",
    triangle_plural: "Triángulos",
    trapezoid_singular: "Trapecio",
    trapezoid_plural: "Trapecios",

    area: "Area",
    perimeter: "Perimetro",
    total: "TOTAL",
    shapes: "formas",

    empty_list_header: "Lista vacía de formas!",
    shapes_report_header: "Reporte de Formas",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    square_singular: "Square",
    square_plural: "Squares",
    circle_singular: "Circle",
    circle_plural: "Circles",
    triangle_singular: "Triangle",
    triangle_plural: "Triangles",
    trapezoid_singular: "Trapezoid",
    trapezoid_plural: "Trapezoids",

    area: "Area",
    perimeter: "Perimeter",
    total: "TOTAL",
    shapes: "shapes",

    empty_list_header: "Empty list of shapes!",
    shapes_report_header: "Shapes report",
};

// ==================== Italian Strings ====================

pub const ITALIAN_STRINGS: LanguageStrings = LanguageStrings {
    square_singular: "Quadrato",
    square_plural: "Quadrati",
    circle_singular: "Cerchio",
    circle_plural: "Cerchi",
    triangle_singular: "Triangolo",
    triangle_plural: "Triangoli",
    trapezoid_singular: "Trapezio",
    trapezoid_plural: "Trapezi",

    area: "Area",
    perimeter: "Perimetro",
    total: "TOTALE",
    shapes: "forme",

    empty_list_header: "Lista vuota di forme!",
    shapes_report_header: "Rapporto sulle forme",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Key Name Tests ====================

    #[test]
    fn test_key_names_round_trip() {
        for key in TranslationKey::ALL {
            assert_eq!(TranslationKey::from_name(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(TranslationKey::from_name("HexagonSingular"), None);
        assert_eq!(TranslationKey::from_name(""), None);
    }

    #[test]
    fn test_key_names_are_unique() {
        let mut names: Vec<_> = TranslationKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TranslationKey::ALL.len());
    }

    // ==================== Table Tests ====================

    #[test]
    fn test_tables_have_every_key() {
        for table in [&SPANISH_STRINGS, &ENGLISH_STRINGS, &ITALIAN_STRINGS] {
            for key in TranslationKey::ALL {
                assert!(!table.raw(key).is_empty(), "empty entry for {:?}", key);
            }
        }
    }

    #[test]
    fn test_english_headers() {
        assert_eq!(ENGLISH_STRINGS.empty_list_header, "Empty list of shapes!");
        assert_eq!(ENGLISH_STRINGS.shapes_report_header, "Shapes report");
    }

    #[test]
    fn test_spanish_labels() {
        assert_eq!(SPANISH_STRINGS.raw(TranslationKey::Perimeter), "Perimetro");
        assert_eq!(SPANISH_STRINGS.raw(TranslationKey::Shapes), "formas");
    }

    // ==================== Missing Key Tests ====================

    #[test]
    fn test_empty_entry_is_missing_key() {
        let incomplete = LanguageStrings {
            area: "",
            ..ENGLISH_STRINGS
        };

        let result = incomplete.get(TranslationKey::Area, "en");
        assert_eq!(
            result,
            Err(I18nError::MissingTranslationKey {
                key: "Area",
                language: "en",
            })
        );
        assert_eq!(incomplete.get(TranslationKey::Perimeter, "en"), Ok("Perimeter"));
    }
}
