//! Shape variants and their geometry.
//!
//! All measurements and results are `Decimal` so that report totals round the
//! same way on every platform. Arithmetic is checked: a result that does not
//! fit in a `Decimal` is a `ShapeError::Overflow`, never a panic.

use crate::i18n::{I18nError, IntoLanguage, TranslationKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;

/// π at the 15 significant digits existing reports were computed with.
pub const PI: Decimal = dec!(3.14159265358979);

/// √3 at the same precision as `PI`.
pub const SQRT_3: Decimal = dec!(1.73205080756888);

/// Failure to compute a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Arithmetic overflow computing {kind:?} geometry")]
    Overflow { kind: ShapeKind },
}

/// A shape with its measurements.
///
/// Deserializes from an object tagged by `kind`, e.g.
/// `{"kind": "trapezoid", "major_base": 6, "minor_base": 4, "height": 2, "leg": 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Square {
        side: Decimal,
    },
    /// Area treats `radius` as a diameter (`π * (r/2)²`) while the perimeter
    /// treats it as a radius (`π * r`). Both formulas are kept as they are
    /// because existing reports depend on them.
    Circle {
        radius: Decimal,
    },
    EquilateralTriangle {
        side: Decimal,
    },
    Trapezoid {
        major_base: Decimal,
        minor_base: Decimal,
        height: Decimal,
        leg: Decimal,
    },
}

impl Shape {
    pub fn square(side: Decimal) -> Self {
        Shape::Square { side }
    }

    pub fn circle(radius: Decimal) -> Self {
        Shape::Circle { radius }
    }

    pub fn equilateral_triangle(side: Decimal) -> Self {
        Shape::EquilateralTriangle { side }
    }

    /// Isosceles trapezoid: both legs have length `leg`.
    pub fn trapezoid(
        major_base: Decimal,
        minor_base: Decimal,
        height: Decimal,
        leg: Decimal,
    ) -> Self {
        Shape::Trapezoid {
            major_base,
            minor_base,
            height,
            leg,
        }
    }

    /// The variant tag, ignoring measurements.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::EquilateralTriangle { .. } => ShapeKind::EquilateralTriangle,
            Shape::Trapezoid { .. } => ShapeKind::Trapezoid,
        }
    }

    pub fn area(&self) -> Result<Decimal, ShapeError> {
        let area = match *self {
            Shape::Square { side } => side.checked_mul(side),
            Shape::Circle { radius } => {
                let half = radius / dec!(2);
                PI.checked_mul(half).and_then(|v| v.checked_mul(half))
            }
            Shape::EquilateralTriangle { side } => (SQRT_3 / dec!(4))
                .checked_mul(side)
                .and_then(|v| v.checked_mul(side)),
            Shape::Trapezoid {
                major_base,
                minor_base,
                height,
                ..
            } => major_base
                .checked_add(minor_base)
                .and_then(|v| v.checked_mul(height))
                .map(|v| v / dec!(2)),
        };
        area.ok_or(ShapeError::Overflow { kind: self.kind() })
    }

    pub fn perimeter(&self) -> Result<Decimal, ShapeError> {
        let perimeter = match *self {
            Shape::Square { side } => side.checked_mul(dec!(4)),
            Shape::Circle { radius } => PI.checked_mul(radius),
            Shape::EquilateralTriangle { side } => side.checked_mul(dec!(3)),
            Shape::Trapezoid {
                major_base,
                minor_base,
                leg,
                ..
            } => dec!(2)
                .checked_mul(leg)
                .and_then(|legs| major_base.checked_add(minor_base)?.checked_add(legs)),
        };
        perimeter.ok_or(ShapeError::Overflow { kind: self.kind() })
    }

    /// Localized name for `count` shapes of this kind.
    pub fn localized_name(
        &self,
        count: usize,
        language: impl IntoLanguage,
    ) -> Result<&'static str, I18nError> {
        self.kind().localized_name(count, language)
    }
}

/// The kind of a shape, without measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Circle,
    EquilateralTriangle,
    Trapezoid,
}

impl ShapeKind {
    /// All kinds, in declaration order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::EquilateralTriangle,
        ShapeKind::Trapezoid,
    ];

    /// Singular and plural name keys of this kind.
    pub fn name_keys(&self) -> (TranslationKey, TranslationKey) {
        match self {
            ShapeKind::Square => (TranslationKey::SquareSingular, TranslationKey::SquarePlural),
            ShapeKind::Circle => (TranslationKey::CircleSingular, TranslationKey::CirclePlural),
            ShapeKind::EquilateralTriangle => {
                (TranslationKey::TriangleSingular, TranslationKey::TrianglePlural)
            }
            ShapeKind::Trapezoid => {
                (TranslationKey::TrapezoidSingular, TranslationKey::TrapezoidPlural)
            }
        }
    }

    /// Singular name when `count == 1`, plural otherwise (including zero).
    pub fn localized_name(
        &self,
        count: usize,
        language: impl IntoLanguage,
    ) -> Result<&'static str, I18nError> {
        let language = language.into_language()?;
        let (singular, plural) = self.name_keys();
        language.translate(if count == 1 { singular } else { plural })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    // ==================== Geometry Tests ====================

    #[test]
    fn test_square_geometry() {
        let square = Shape::square(dec!(2));
        assert_eq!(square.area(), Ok(dec!(4)));
        assert_eq!(square.perimeter(), Ok(dec!(8)));
    }

    #[test]
    fn test_square_decimal_side() {
        let square = Shape::square(dec!(1.1));
        assert_eq!(square.area(), Ok(dec!(1.21)));
        assert_eq!(square.perimeter(), Ok(dec!(4.4)));
    }

    #[test]
    fn test_circle_formulas_are_pinned() {
        // Area halves the stored value, perimeter does not.
        let circle = Shape::circle(dec!(2));
        assert_eq!(circle.area(), Ok(dec!(3.14159265358979)));
        assert_eq!(circle.perimeter(), Ok(dec!(6.28318530717958)));

        let circle = Shape::circle(dec!(3));
        assert_eq!(circle.area().map(|a| a.round_dp(2)), Ok(dec!(7.07)));
        assert_eq!(circle.perimeter().map(|p| p.round_dp(2)), Ok(dec!(9.42)));
    }

    #[test]
    fn test_equilateral_triangle_geometry() {
        let triangle = Shape::equilateral_triangle(dec!(2));
        assert_eq!(triangle.area(), Ok(dec!(1.73205080756888)));
        assert_eq!(triangle.perimeter(), Ok(dec!(6)));
    }

    #[test]
    fn test_trapezoid_geometry() {
        let trapezoid = Shape::trapezoid(dec!(6), dec!(4), dec!(2), dec!(3));
        assert_eq!(trapezoid.area(), Ok(dec!(10)));
        assert_eq!(trapezoid.perimeter(), Ok(dec!(16)));
    }

    #[test]
    fn test_zero_and_negative_measurements_are_not_validated() {
        assert_eq!(Shape::square(dec!(0)).area(), Ok(dec!(0)));
        assert_eq!(Shape::square(dec!(-2)).perimeter(), Ok(dec!(-8)));
    }

    // ==================== Overflow Tests ====================

    #[test]
    fn test_area_overflow_is_error() {
        let square = Shape::square(dec!(1000000000000000));
        assert_eq!(
            square.area(),
            Err(ShapeError::Overflow {
                kind: ShapeKind::Square
            })
        );
        // The perimeter still fits
        assert_eq!(square.perimeter(), Ok(dec!(4000000000000000)));
    }

    #[test]
    fn test_perimeter_overflow_is_error() {
        let trapezoid = Shape::trapezoid(Decimal::MAX, Decimal::MAX, dec!(0), dec!(1));
        assert_eq!(
            trapezoid.perimeter(),
            Err(ShapeError::Overflow {
                kind: ShapeKind::Trapezoid
            })
        );
        assert_eq!(
            Shape::circle(Decimal::MAX).perimeter(),
            Err(ShapeError::Overflow {
                kind: ShapeKind::Circle
            })
        );
    }

    // ==================== Kind Tests ====================

    #[test]
    fn test_kind_ignores_measurements() {
        assert_eq!(Shape::square(dec!(2)).kind(), Shape::square(dec!(3)).kind());
        assert_ne!(
            Shape::square(dec!(2)).kind(),
            Shape::equilateral_triangle(dec!(2)).kind()
        );
    }

    #[test]
    fn test_every_kind_has_distinct_name_keys() {
        for kind in ShapeKind::ALL {
            let (singular, plural) = kind.name_keys();
            assert_ne!(singular, plural);
        }
    }

    // ==================== Name Tests ====================

    #[test]
    fn test_localized_name_singular_and_plural() {
        let square = Shape::square(dec!(1));
        assert_eq!(square.localized_name(1, Language::ENGLISH), Ok("Square"));
        assert_eq!(square.localized_name(2, Language::ENGLISH), Ok("Squares"));
        assert_eq!(square.localized_name(0, Language::ENGLISH), Ok("Squares"));
    }

    #[test]
    fn test_localized_name_per_language() {
        let trapezoid = ShapeKind::Trapezoid;
        assert_eq!(trapezoid.localized_name(1, Language::SPANISH), Ok("Trapecio"));
        assert_eq!(trapezoid.localized_name(3, Language::ITALIAN), Ok("Trapezi"));
        assert_eq!(ShapeKind::Circle.localized_name(2, "es"), Ok("Círculos"));
    }

    #[test]
    fn test_localized_name_unsupported_language() {
        assert_eq!(
            ShapeKind::Square.localized_name(1, "fr"),
            Err(I18nError::UnsupportedLanguage("fr".to_string()))
        );
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_deserialize_tagged_shapes() {
        let json = r#"[
            {"kind": "square", "side": 2},
            {"kind": "circle", "radius": "2.75"},
            {"kind": "equilateral_triangle", "side": 4},
            {"kind": "trapezoid", "major_base": 6, "minor_base": 4, "height": 2, "leg": 3}
        ]"#;

        let shapes: Vec<Shape> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            shapes,
            vec![
                Shape::square(dec!(2)),
                Shape::circle(dec!(2.75)),
                Shape::equilateral_triangle(dec!(4)),
                Shape::trapezoid(dec!(6), dec!(4), dec!(2), dec!(3)),
            ]
        );
    }

    #[test]
    fn test_deserialize_unknown_kind_fails() {
        let result: Result<Shape, _> = serde_json::from_str(r#"{"kind": "hexagon", "side": 1}"#);
        assert!(result.is_err());
    }
}
