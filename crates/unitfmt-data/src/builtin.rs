#![forbid(unsafe_code)]

//! Built-in tables for English, German, and Polish.
//!
//! The tables hold the subset of CLDR unit data the formatter's own tests
//! and documentation rely on. Applications with more data build their own
//! [`UnitTable`]s and register them.

use unitfmt_core::{DecimalSymbols, PluralRule, Result, Width};

use crate::clock::ClockPatterns;
use crate::currency::CurrencyData;
use crate::list::ListPatterns;
use crate::table::{UnitTable, UnitTableBuilder};
use crate::unit::{CurrencyCode, MeasureUnit};

/// Plural forms of one unit. Each width lists one template per category in
/// the table's category order; an empty template means "no form".
struct Row {
    unit: MeasureUnit,
    wide: &'static [&'static str],
    short: &'static [&'static str],
    narrow: &'static [&'static str],
    /// Display names: wide, short, narrow.
    names: [&'static str; 3],
}

const ONE_OTHER: &[&str] = &["one", "other"];
const ONE_FEW_MANY_OTHER: &[&str] = &["one", "few", "many", "other"];

fn load_rows(b: &mut UnitTableBuilder, categories: &[&str], rows: &[Row]) -> Result<()> {
    for row in rows {
        for (width, templates) in [
            (Width::Wide, row.wide),
            (Width::Short, row.short),
            (Width::Narrow, row.narrow),
        ] {
            let forms: Vec<(&str, &str)> = categories
                .iter()
                .copied()
                .zip(templates.iter().copied())
                .filter(|(_, template)| !template.is_empty())
                .collect();
            if !forms.is_empty() {
                b.quantity(row.unit, width, &forms)?;
            }
        }
        for (width, name) in [Width::Wide, Width::Short, Width::Narrow]
            .into_iter()
            .zip(row.names)
        {
            b.display_name(row.unit, width, name);
        }
    }
    Ok(())
}

fn per_units(b: &mut UnitTableBuilder, rows: &[(MeasureUnit, [&str; 3])]) -> Result<()> {
    for (unit, templates) in rows {
        for (width, template) in [Width::Wide, Width::Short, Width::Narrow]
            .into_iter()
            .zip(templates)
        {
            b.per_unit(*unit, width, template)?;
        }
    }
    Ok(())
}

// ── English ──────────────────────────────────────────────────────────

const EN_UNITS: &[Row] = &[
    Row {
        unit: MeasureUnit::HOUR,
        wide: &["{0} hour", "{0} hours"],
        short: &["{0} hr", "{0} hr"],
        narrow: &["{0}h", "{0}h"],
        names: ["hours", "hr", "hr"],
    },
    Row {
        unit: MeasureUnit::MINUTE,
        wide: &["{0} minute", "{0} minutes"],
        short: &["{0} min", "{0} min"],
        narrow: &["{0}m", "{0}m"],
        names: ["minutes", "min", "min"],
    },
    Row {
        unit: MeasureUnit::SECOND,
        wide: &["{0} second", "{0} seconds"],
        short: &["{0} sec", "{0} sec"],
        narrow: &["{0}s", "{0}s"],
        names: ["seconds", "sec", "sec"],
    },
    Row {
        unit: MeasureUnit::MILLISECOND,
        wide: &["{0} millisecond", "{0} milliseconds"],
        short: &["{0} ms", "{0} ms"],
        narrow: &["{0}ms", "{0}ms"],
        names: ["milliseconds", "msec", "msec"],
    },
    Row {
        unit: MeasureUnit::DAY,
        wide: &["{0} day", "{0} days"],
        short: &["{0} day", "{0} days"],
        narrow: &["{0}d", "{0}d"],
        names: ["days", "days", "day"],
    },
    Row {
        unit: MeasureUnit::WEEK,
        wide: &["{0} week", "{0} weeks"],
        short: &["{0} wk", "{0} wks"],
        narrow: &["{0}w", "{0}w"],
        names: ["weeks", "wks", "wk"],
    },
    Row {
        unit: MeasureUnit::MONTH,
        wide: &["{0} month", "{0} months"],
        short: &["{0} mth", "{0} mths"],
        narrow: &["{0}m", "{0}m"],
        names: ["months", "mths", "month"],
    },
    Row {
        unit: MeasureUnit::YEAR,
        wide: &["{0} year", "{0} years"],
        short: &["{0} yr", "{0} yrs"],
        narrow: &["{0}y", "{0}y"],
        names: ["years", "yrs", "yr"],
    },
    Row {
        unit: MeasureUnit::KILOMETER,
        wide: &["{0} kilometer", "{0} kilometers"],
        short: &["{0} km", "{0} km"],
        narrow: &["{0}km", "{0}km"],
        names: ["kilometers", "km", "km"],
    },
    Row {
        unit: MeasureUnit::METER,
        wide: &["{0} meter", "{0} meters"],
        short: &["{0} m", "{0} m"],
        narrow: &["{0}m", "{0}m"],
        names: ["meters", "m", "m"],
    },
    Row {
        unit: MeasureUnit::CENTIMETER,
        wide: &["{0} centimeter", "{0} centimeters"],
        short: &["{0} cm", "{0} cm"],
        narrow: &["{0}cm", "{0}cm"],
        names: ["centimeters", "cm", "cm"],
    },
    Row {
        unit: MeasureUnit::MILLIMETER,
        wide: &["{0} millimeter", "{0} millimeters"],
        short: &["{0} mm", "{0} mm"],
        narrow: &["{0}mm", "{0}mm"],
        names: ["millimeters", "mm", "mm"],
    },
    Row {
        unit: MeasureUnit::MILE,
        wide: &["{0} mile", "{0} miles"],
        short: &["{0} mi", "{0} mi"],
        narrow: &["{0}mi", "{0}mi"],
        names: ["miles", "mi", "mi"],
    },
    Row {
        unit: MeasureUnit::YARD,
        wide: &["{0} yard", "{0} yards"],
        short: &["{0} yd", "{0} yd"],
        narrow: &["{0}yd", "{0}yd"],
        names: ["yards", "yd", "yd"],
    },
    Row {
        unit: MeasureUnit::FOOT,
        wide: &["{0} foot", "{0} feet"],
        short: &["{0} ft", "{0} ft"],
        narrow: &["{0}′", "{0}′"],
        names: ["feet", "ft", "ft"],
    },
    Row {
        unit: MeasureUnit::INCH,
        wide: &["{0} inch", "{0} inches"],
        short: &["{0} in", "{0} in"],
        narrow: &["{0}″", "{0}″"],
        names: ["inches", "in", "in"],
    },
    Row {
        unit: MeasureUnit::KILOGRAM,
        wide: &["{0} kilogram", "{0} kilograms"],
        short: &["{0} kg", "{0} kg"],
        narrow: &["{0}kg", "{0}kg"],
        names: ["kilograms", "kg", "kg"],
    },
    Row {
        unit: MeasureUnit::GRAM,
        wide: &["{0} gram", "{0} grams"],
        short: &["{0} g", "{0} g"],
        narrow: &["{0}g", "{0}g"],
        names: ["grams", "g", "g"],
    },
    Row {
        unit: MeasureUnit::POUND,
        wide: &["{0} pound", "{0} pounds"],
        short: &["{0} lb", "{0} lb"],
        narrow: &["{0}#", "{0}#"],
        names: ["pounds", "lb", "lb"],
    },
    Row {
        unit: MeasureUnit::SQUARE_METER,
        wide: &["{0} square meter", "{0} square meters"],
        short: &["{0} m²", "{0} m²"],
        narrow: &["{0}m²", "{0}m²"],
        names: ["square meters", "meters²", "m²"],
    },
    Row {
        unit: MeasureUnit::SQUARE_INCH,
        wide: &["{0} square inch", "{0} square inches"],
        short: &["{0} in²", "{0} in²"],
        narrow: &["{0}in²", "{0}in²"],
        names: ["square inches", "inches²", "in²"],
    },
    Row {
        unit: MeasureUnit::KILOMETER_PER_HOUR,
        wide: &["{0} kilometer per hour", "{0} kilometers per hour"],
        short: &["{0} km/h", "{0} km/h"],
        narrow: &["{0}km/h", "{0}km/h"],
        names: ["kilometers per hour", "km/hour", "km/h"],
    },
    Row {
        unit: MeasureUnit::METER_PER_SECOND,
        wide: &["{0} meter per second", "{0} meters per second"],
        short: &["{0} m/s", "{0} m/s"],
        narrow: &["{0}m/s", "{0}m/s"],
        names: ["meters per second", "meters/sec", "m/s"],
    },
    Row {
        unit: MeasureUnit::MILE_PER_HOUR,
        wide: &["{0} mile per hour", "{0} miles per hour"],
        short: &["{0} mph", "{0} mph"],
        narrow: &["{0}mph", "{0}mph"],
        names: ["miles per hour", "miles/hour", "mph"],
    },
    Row {
        unit: MeasureUnit::POUND_FORCE_PER_SQUARE_INCH,
        wide: &[
            "{0} pound-force per square inch",
            "{0} pounds-force per square inch",
        ],
        short: &["{0} psi", "{0} psi"],
        narrow: &["{0}psi", "{0}psi"],
        names: ["pounds-force per square inch", "psi", "psi"],
    },
    Row {
        unit: MeasureUnit::CELSIUS,
        wide: &["{0} degree Celsius", "{0} degrees Celsius"],
        short: &["{0}°C", "{0}°C"],
        narrow: &["{0}°C", "{0}°C"],
        names: ["degrees Celsius", "deg. C", "°C"],
    },
    Row {
        unit: MeasureUnit::FAHRENHEIT,
        wide: &["{0} degree Fahrenheit", "{0} degrees Fahrenheit"],
        short: &["{0}°F", "{0}°F"],
        narrow: &["{0}°", "{0}°"],
        names: ["degrees Fahrenheit", "deg. F", "°F"],
    },
    Row {
        unit: MeasureUnit::AMPERE,
        wide: &["{0} ampere", "{0} amperes"],
        short: &["{0} A", "{0} A"],
        narrow: &["{0}A", "{0}A"],
        names: ["amperes", "amps", "amp"],
    },
];

const EN_PER_UNITS: &[(MeasureUnit, [&str; 3])] = &[
    (MeasureUnit::HOUR, ["{0} per hour", "{0}/h", "{0}/h"]),
    (MeasureUnit::MINUTE, ["{0} per minute", "{0}/min", "{0}/min"]),
    (MeasureUnit::SECOND, ["{0} per second", "{0}/s", "{0}/s"]),
    (MeasureUnit::DAY, ["{0} per day", "{0}/d", "{0}/d"]),
    (MeasureUnit::WEEK, ["{0} per week", "{0}/w", "{0}/w"]),
    (MeasureUnit::MONTH, ["{0} per month", "{0}/m", "{0}/m"]),
    (MeasureUnit::YEAR, ["{0} per year", "{0}/y", "{0}/y"]),
    (MeasureUnit::METER, ["{0} per meter", "{0}/m", "{0}/m"]),
    (MeasureUnit::KILOGRAM, ["{0} per kilogram", "{0}/kg", "{0}/kg"]),
];

/// English (`en`).
pub fn english() -> Result<UnitTable> {
    let mut b = UnitTableBuilder::new("en");
    b.plural_rule(PluralRule::English)
        .decimal_symbols(DecimalSymbols::LATIN)
        .clock(ClockPatterns::new("h:mm", "m:ss", "h:mm:ss"));
    load_rows(&mut b, ONE_OTHER, EN_UNITS)?;
    per_units(&mut b, EN_PER_UNITS)?;
    b.compound_per(Width::Wide, "{0} per {1}")?
        .compound_per(Width::Short, "{0}/{1}")?
        .compound_per(Width::Narrow, "{0}/{1}")?;

    let unit_list = ListPatterns::uniform("{0}, {1}")?;
    b.list(Width::Wide, unit_list.clone())
        .list(Width::Short, unit_list)
        .list(Width::Narrow, ListPatterns::uniform("{0} {1}")?);

    b.currency(
        CurrencyCode::USD,
        CurrencyData::new(2)
            .with_names(Width::Wide, &[("one", "{0} US dollar"), ("other", "{0} US dollars")])?
            .with_names(Width::Short, &[("other", "USD\u{a0}{0}")])?
            .with_names(Width::Narrow, &[("other", "${0}")])?,
    )
    .currency(
        CurrencyCode::EUR,
        CurrencyData::new(2)
            .with_names(Width::Wide, &[("one", "{0} euro"), ("other", "{0} euros")])?
            .with_names(Width::Short, &[("other", "EUR\u{a0}{0}")])?
            .with_names(Width::Narrow, &[("other", "€{0}")])?,
    )
    .currency(
        CurrencyCode::JPY,
        CurrencyData::new(0)
            .with_names(Width::Wide, &[("other", "{0} Japanese yen")])?
            .with_names(Width::Short, &[("other", "JPY\u{a0}{0}")])?
            .with_names(Width::Narrow, &[("other", "¥{0}")])?,
    );
    Ok(b.build())
}

// ── German ───────────────────────────────────────────────────────────

const DE_UNITS: &[Row] = &[
    Row {
        unit: MeasureUnit::HOUR,
        wide: &["{0} Stunde", "{0} Stunden"],
        short: &["{0} Std.", "{0} Std."],
        narrow: &["{0} Std.", "{0} Std."],
        names: ["Stunden", "Std.", "Std."],
    },
    Row {
        unit: MeasureUnit::MINUTE,
        wide: &["{0} Minute", "{0} Minuten"],
        short: &["{0} Min.", "{0} Min."],
        narrow: &["{0} Min.", "{0} Min."],
        names: ["Minuten", "Min.", "Min."],
    },
    Row {
        unit: MeasureUnit::SECOND,
        wide: &["{0} Sekunde", "{0} Sekunden"],
        short: &["{0} Sek.", "{0} Sek."],
        narrow: &["{0} Sek.", "{0} Sek."],
        names: ["Sekunden", "Sek.", "Sek."],
    },
    Row {
        unit: MeasureUnit::DAY,
        wide: &["{0} Tag", "{0} Tage"],
        short: &["{0} Tg.", "{0} Tg."],
        narrow: &["{0} T", "{0} T"],
        names: ["Tage", "Tg.", "T"],
    },
    Row {
        unit: MeasureUnit::WEEK,
        wide: &["{0} Woche", "{0} Wochen"],
        short: &["{0} Wo.", "{0} Wo."],
        narrow: &["{0} W", "{0} W"],
        names: ["Wochen", "Wo.", "W"],
    },
    Row {
        unit: MeasureUnit::MONTH,
        wide: &["{0} Monat", "{0} Monate"],
        short: &["{0} Mon.", "{0} Mon."],
        narrow: &["{0} M", "{0} M"],
        names: ["Monate", "Mon.", "M"],
    },
    Row {
        unit: MeasureUnit::YEAR,
        wide: &["{0} Jahr", "{0} Jahre"],
        short: &["{0} J", "{0} J"],
        narrow: &["{0} J", "{0} J"],
        names: ["Jahre", "J", "J"],
    },
    Row {
        unit: MeasureUnit::KILOMETER,
        wide: &["{0} Kilometer", "{0} Kilometer"],
        short: &["{0} km", "{0} km"],
        narrow: &["{0} km", "{0} km"],
        names: ["Kilometer", "km", "km"],
    },
    Row {
        unit: MeasureUnit::METER,
        wide: &["{0} Meter", "{0} Meter"],
        short: &["{0} m", "{0} m"],
        narrow: &["{0} m", "{0} m"],
        names: ["Meter", "m", "m"],
    },
    Row {
        unit: MeasureUnit::MILE,
        wide: &["{0} Meile", "{0} Meilen"],
        short: &["{0} mi", "{0} mi"],
        narrow: &["{0} mi", "{0} mi"],
        names: ["Meilen", "mi", "mi"],
    },
    Row {
        unit: MeasureUnit::FOOT,
        wide: &["{0} Fuß", "{0} Fuß"],
        short: &["{0} ft", "{0} ft"],
        narrow: &["{0} ft", "{0} ft"],
        names: ["Fuß", "ft", "ft"],
    },
    Row {
        unit: MeasureUnit::INCH,
        wide: &["{0} Zoll", "{0} Zoll"],
        short: &["{0} in", "{0} in"],
        narrow: &["{0} in", "{0} in"],
        names: ["Zoll", "in", "in"],
    },
    Row {
        unit: MeasureUnit::KILOGRAM,
        wide: &["{0} Kilogramm", "{0} Kilogramm"],
        short: &["{0} kg", "{0} kg"],
        narrow: &["{0} kg", "{0} kg"],
        names: ["Kilogramm", "kg", "kg"],
    },
    Row {
        unit: MeasureUnit::POUND,
        wide: &["{0} Pfund", "{0} Pfund"],
        short: &["{0} lb", "{0} lb"],
        narrow: &["{0} lb", "{0} lb"],
        names: ["Pfund", "lb", "lb"],
    },
];

const DE_PER_UNITS: &[(MeasureUnit, [&str; 3])] = &[
    (MeasureUnit::HOUR, ["{0} pro Stunde", "{0}/h", "{0}/h"]),
    (MeasureUnit::MINUTE, ["{0} pro Minute", "{0}/min", "{0}/min"]),
    (MeasureUnit::SECOND, ["{0} pro Sekunde", "{0}/s", "{0}/s"]),
];

/// German (`de`).
pub fn german() -> Result<UnitTable> {
    let mut b = UnitTableBuilder::new("de");
    b.plural_rule(PluralRule::English)
        .decimal_symbols(DecimalSymbols {
            decimal: ',',
            grouping: '.',
            minus: '-',
        })
        .clock(ClockPatterns::new("h:mm", "m:ss", "h:mm:ss"));
    load_rows(&mut b, ONE_OTHER, DE_UNITS)?;
    per_units(&mut b, DE_PER_UNITS)?;
    b.compound_per(Width::Wide, "{0} pro {1}")?
        .compound_per(Width::Short, "{0}/{1}")?
        .compound_per(Width::Narrow, "{0}/{1}")?;

    let unit_list = ListPatterns::new("{0}, {1}", "{0}, {1}", "{0}, {1}", "{0} und {1}")?;
    b.list(
        Width::Wide,
        ListPatterns::new("{0} und {1}", "{0}, {1}", "{0}, {1}", "{0} und {1}")?,
    )
    .list(Width::Short, unit_list.clone())
    .list(Width::Narrow, unit_list);

    b.currency(
        CurrencyCode::USD,
        CurrencyData::new(2)
            .with_names(Width::Wide, &[("other", "{0} US-Dollar")])?
            .with_names(Width::Short, &[("other", "{0}\u{a0}USD")])?
            .with_names(Width::Narrow, &[("other", "{0}\u{a0}$")])?,
    )
    .currency(
        CurrencyCode::EUR,
        CurrencyData::new(2)
            .with_names(Width::Wide, &[("other", "{0} Euro")])?
            .with_names(Width::Short, &[("other", "{0}\u{a0}EUR")])?
            .with_names(Width::Narrow, &[("other", "{0}\u{a0}€")])?,
    );
    Ok(b.build())
}

// ── Polish ───────────────────────────────────────────────────────────

const PL_UNITS: &[Row] = &[
    Row {
        unit: MeasureUnit::HOUR,
        wide: &["{0} godzina", "{0} godziny", "{0} godzin", "{0} godziny"],
        short: &["{0} godz.", "{0} godz.", "{0} godz.", "{0} godz."],
        narrow: &["{0} g.", "{0} g.", "{0} g.", "{0} g."],
        names: ["godziny", "godz.", "godz."],
    },
    Row {
        unit: MeasureUnit::MINUTE,
        wide: &["{0} minuta", "{0} minuty", "{0} minut", "{0} minuty"],
        short: &["{0} min", "{0} min", "{0} min", "{0} min"],
        narrow: &["{0} min", "{0} min", "{0} min", "{0} min"],
        names: ["minuty", "min", "min"],
    },
    Row {
        unit: MeasureUnit::SECOND,
        wide: &["{0} sekunda", "{0} sekundy", "{0} sekund", "{0} sekundy"],
        short: &["{0} sek.", "{0} sek.", "{0} sek.", "{0} sek."],
        narrow: &["{0} s", "{0} s", "{0} s", "{0} s"],
        names: ["sekundy", "sek.", "s"],
    },
    Row {
        unit: MeasureUnit::METER,
        wide: &["{0} metr", "{0} metry", "{0} metrów", "{0} metra"],
        short: &["{0} m", "{0} m", "{0} m", "{0} m"],
        narrow: &["{0} m", "{0} m", "{0} m", "{0} m"],
        names: ["metry", "m", "m"],
    },
    Row {
        unit: MeasureUnit::FOOT,
        wide: &["{0} stopa", "{0} stopy", "{0} stóp", "{0} stopy"],
        short: &["{0} ft", "{0} ft", "{0} ft", "{0} ft"],
        narrow: &["{0} ft", "{0} ft", "{0} ft", "{0} ft"],
        names: ["stopy", "ft", "ft"],
    },
];

const PL_PER_UNITS: &[(MeasureUnit, [&str; 3])] = &[
    (MeasureUnit::HOUR, ["{0} na godzinę", "{0}/godz.", "{0}/g."]),
    (MeasureUnit::MINUTE, ["{0} na minutę", "{0}/min", "{0}/min"]),
    (MeasureUnit::SECOND, ["{0} na sekundę", "{0}/s", "{0}/s"]),
];

/// Polish (`pl`).
pub fn polish() -> Result<UnitTable> {
    let mut b = UnitTableBuilder::new("pl");
    b.plural_rule(PluralRule::Polish)
        .decimal_symbols(DecimalSymbols {
            decimal: ',',
            grouping: '\u{a0}',
            minus: '-',
        })
        .clock(ClockPatterns::new("h:mm", "m:ss", "h:mm:ss"));
    load_rows(&mut b, ONE_FEW_MANY_OTHER, PL_UNITS)?;
    per_units(&mut b, PL_PER_UNITS)?;
    b.compound_per(Width::Wide, "{0} na {1}")?
        .compound_per(Width::Short, "{0}/{1}")?
        .compound_per(Width::Narrow, "{0}/{1}")?;

    b.list(
        Width::Wide,
        ListPatterns::new("{0} i {1}", "{0}, {1}", "{0}, {1}", "{0} i {1}")?,
    )
    .list(
        Width::Short,
        ListPatterns::new("{0}, {1}", "{0}, {1}", "{0}, {1}", "{0} i {1}")?,
    )
    .list(Width::Narrow, ListPatterns::uniform("{0} {1}")?);
    Ok(b.build())
}
