use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Indian financial year (runs 1 April to 31 March)
/// The year value represents the start year (e.g., 2023 = FY2023-24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FinancialYear(pub i32);

impl FinancialYear {
    /// The year whose old-regime slabs this crate implements
    pub const FY2023_24: FinancialYear = FinancialYear(2023);

    /// Financial year a date falls into
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        // Financial year starts 1 April
        if date.month() >= 4 {
            FinancialYear(year)
        } else {
            FinancialYear(year - 1)
        }
    }

    /// Start date of the financial year (1 April), `None` outside chrono's
    /// date range
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 4, 1)
    }

    /// End date of the financial year (31 March of the following year)
    pub fn end_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0.checked_add(1)?, 3, 31)
    }

    /// Assessment year in which income of this financial year is assessed
    pub fn assessment_year(&self) -> Option<FinancialYear> {
        self.0.checked_add(1).map(FinancialYear)
    }

    /// Display as "2023-24" format
    pub fn display(&self) -> String {
        format!("{}-{:02}", self.0, (i64::from(self.0) + 1).rem_euclid(100))
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A contiguous income range taxed at a single marginal rate.
///
/// The range is open below and closed above: `lower < income <= upper`.
/// The top slab has no upper bound, and zero or negative income is taxed
/// in the lowest slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slab {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl Slab {
    /// Whether `income` is at or below this slab's upper bound
    pub fn caps(&self, income: Decimal) -> bool {
        self.upper.map_or(true, |upper| income <= upper)
    }

    /// Portion of `income` that falls inside this slab
    pub fn taxable(&self, income: Decimal) -> Decimal {
        if income <= self.lower {
            return Decimal::ZERO;
        }
        match self.upper {
            Some(upper) if income > upper => upper - self.lower,
            _ => income - self.lower,
        }
    }
}

/// Old regime slabs for FY2023-24 (individuals below 60)
pub fn old_regime_slabs() -> [Slab; 4] {
    [
        // Up to 2,50,000: Nil
        Slab {
            lower: Decimal::ZERO,
            upper: Some(dec!(250000)),
            rate: Decimal::ZERO,
        },
        // 2,50,001 to 5,00,000: 5%
        Slab {
            lower: dec!(250000),
            upper: Some(dec!(500000)),
            rate: dec!(0.05),
        },
        // 5,00,001 to 10,00,000: 20%
        Slab {
            lower: dec!(500000),
            upper: Some(dec!(1000000)),
            rate: dec!(0.20),
        },
        // Above 10,00,000: 30%
        Slab {
            lower: dec!(1000000),
            upper: None,
            rate: dec!(0.30),
        },
    ]
}

/// Health and education cess, levied on the computed tax
pub fn cess_rate() -> Decimal {
    dec!(0.04)
}
