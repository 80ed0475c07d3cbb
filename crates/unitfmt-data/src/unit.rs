#![forbid(unsafe_code)]

//! Measure units, currency codes, and measures.
//!
//! A [`MeasureUnit`] is a stable small index into a fixed unit table. Each
//! unit has a CLDR type ("duration", "length", ...) and subtype ("hour",
//! "foot", ...). Locale tables are indexed by [`MeasureUnit::index`].

use core::fmt;

/// `(type, subtype)` for every unit, in index order.
const UNITS: &[(&str, &str)] = &[
    ("duration", "hour"),
    ("duration", "minute"),
    ("duration", "second"),
    ("duration", "millisecond"),
    ("duration", "day"),
    ("duration", "week"),
    ("duration", "month"),
    ("duration", "year"),
    ("duration", "day-person"),
    ("duration", "week-person"),
    ("duration", "month-person"),
    ("duration", "year-person"),
    ("length", "kilometer"),
    ("length", "meter"),
    ("length", "centimeter"),
    ("length", "millimeter"),
    ("length", "mile"),
    ("length", "yard"),
    ("length", "foot"),
    ("length", "inch"),
    ("mass", "kilogram"),
    ("mass", "gram"),
    ("mass", "pound"),
    ("area", "square-meter"),
    ("area", "square-inch"),
    ("speed", "kilometer-per-hour"),
    ("speed", "meter-per-second"),
    ("speed", "mile-per-hour"),
    ("pressure", "pound-force-per-square-inch"),
    ("temperature", "celsius"),
    ("temperature", "fahrenheit"),
    ("electric", "ampere"),
];

/// A unit of measure.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeasureUnit {
    index: u16,
}

impl MeasureUnit {
    pub const HOUR: Self = Self::at(0);
    pub const MINUTE: Self = Self::at(1);
    pub const SECOND: Self = Self::at(2);
    pub const MILLISECOND: Self = Self::at(3);
    pub const DAY: Self = Self::at(4);
    pub const WEEK: Self = Self::at(5);
    pub const MONTH: Self = Self::at(6);
    pub const YEAR: Self = Self::at(7);
    pub const DAY_PERSON: Self = Self::at(8);
    pub const WEEK_PERSON: Self = Self::at(9);
    pub const MONTH_PERSON: Self = Self::at(10);
    pub const YEAR_PERSON: Self = Self::at(11);
    pub const KILOMETER: Self = Self::at(12);
    pub const METER: Self = Self::at(13);
    pub const CENTIMETER: Self = Self::at(14);
    pub const MILLIMETER: Self = Self::at(15);
    pub const MILE: Self = Self::at(16);
    pub const YARD: Self = Self::at(17);
    pub const FOOT: Self = Self::at(18);
    pub const INCH: Self = Self::at(19);
    pub const KILOGRAM: Self = Self::at(20);
    pub const GRAM: Self = Self::at(21);
    pub const POUND: Self = Self::at(22);
    pub const SQUARE_METER: Self = Self::at(23);
    pub const SQUARE_INCH: Self = Self::at(24);
    pub const KILOMETER_PER_HOUR: Self = Self::at(25);
    pub const METER_PER_SECOND: Self = Self::at(26);
    pub const MILE_PER_HOUR: Self = Self::at(27);
    pub const POUND_FORCE_PER_SQUARE_INCH: Self = Self::at(28);
    pub const CELSIUS: Self = Self::at(29);
    pub const FAHRENHEIT: Self = Self::at(30);
    pub const AMPERE: Self = Self::at(31);

    /// Number of known units.
    pub const COUNT: usize = UNITS.len();

    const fn at(index: u16) -> Self {
        Self { index }
    }

    /// Every unit, in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u16).map(Self::at)
    }

    /// The unit's stable table index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// CLDR unit type, e.g. `"duration"`.
    #[must_use]
    pub fn ty(self) -> &'static str {
        UNITS[self.index()].0
    }

    /// CLDR unit subtype, e.g. `"hour"`.
    #[must_use]
    pub fn subtype(self) -> &'static str {
        UNITS[self.index()].1
    }

    /// Look a unit up by subtype (`"foot"`) or by `type-subtype`
    /// (`"length-foot"`).
    #[must_use]
    pub fn from_identifier(id: &str) -> Option<Self> {
        Self::all().find(|unit| {
            let (ty, subtype) = UNITS[unit.index()];
            id == subtype
                || id
                    .strip_prefix(ty)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .is_some_and(|rest| rest == subtype)
        })
    }

    /// The unit whose patterns this unit formats with. Person-variant
    /// durations ("year-person") format as their plain duration.
    #[must_use]
    pub const fn base_unit(self) -> Self {
        match self.index {
            8 => Self::DAY,
            9 => Self::WEEK,
            10 => Self::MONTH,
            11 => Self::YEAR,
            _ => self,
        }
    }

    #[must_use]
    pub const fn is_person_variant(self) -> bool {
        self.base_unit().index != self.index
    }
}

impl fmt::Debug for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MeasureUnit({self})")
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.ty(), self.subtype())
    }
}

/// Simple compound units that have their own patterns.
const COMPOUNDS: &[(MeasureUnit, MeasureUnit, MeasureUnit)] = &[
    (
        MeasureUnit::KILOMETER,
        MeasureUnit::HOUR,
        MeasureUnit::KILOMETER_PER_HOUR,
    ),
    (
        MeasureUnit::METER,
        MeasureUnit::SECOND,
        MeasureUnit::METER_PER_SECOND,
    ),
    (MeasureUnit::MILE, MeasureUnit::HOUR, MeasureUnit::MILE_PER_HOUR),
    (
        MeasureUnit::POUND,
        MeasureUnit::SQUARE_INCH,
        MeasureUnit::POUND_FORCE_PER_SQUARE_INCH,
    ),
];

/// The compound unit meaning `unit` per `per_unit`, if one exists.
#[must_use]
pub fn resolve_unit_per_unit(unit: MeasureUnit, per_unit: MeasureUnit) -> Option<MeasureUnit> {
    COMPOUNDS
        .iter()
        .find(|(u, per, _)| *u == unit && *per == per_unit)
        .map(|(_, _, compound)| *compound)
}

/// An ISO 4217 currency code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    pub const USD: Self = Self(*b"USD");
    pub const EUR: Self = Self(*b"EUR");
    pub const JPY: Self = Self(*b"JPY");

    /// Parse a code of three ASCII letters; lowercase is folded to upper.
    #[must_use]
    pub fn new(code: &str) -> Option<Self> {
        let bytes: [u8; 3] = code.as_bytes().try_into().ok()?;
        bytes
            .iter()
            .all(u8::is_ascii_alphabetic)
            .then(|| Self(bytes.map(|b| b.to_ascii_uppercase())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        core::str::from_utf8(&self.0).unwrap_or("XXX")
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a measure's value counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Measure(MeasureUnit),
    Currency(CurrencyCode),
}

impl From<MeasureUnit> for Unit {
    fn from(unit: MeasureUnit) -> Self {
        Self::Measure(unit)
    }
}

impl From<CurrencyCode> for Unit {
    fn from(code: CurrencyCode) -> Self {
        Self::Currency(code)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measure(unit) => unit.fmt(f),
            Self::Currency(code) => write!(f, "currency-{code}"),
        }
    }
}

/// A value with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: Unit,
}

impl Measure {
    pub fn new(value: f64, unit: impl Into<Unit>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// The measure unit, or `None` for currency amounts.
    #[must_use]
    pub fn measure_unit(&self) -> Option<MeasureUnit> {
        match self.unit {
            Unit::Measure(unit) => Some(unit),
            Unit::Currency(_) => None,
        }
    }
}
