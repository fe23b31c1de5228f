pub mod india;
pub mod tds;

pub use india::{cess_rate, old_regime_slabs, FinancialYear, Slab};
pub use tds::{
    calculate, compute_tax, compute_tax_f64, format_amount, monthly_tds, round_half_up, Income,
    Liability, SlabLine, TaxBreakdown,
};
