//! Test entity builders

use domain_fund::Fund;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fluent builder for test funds
///
/// # Example
///
/// ```rust
/// use test_utils::FundBuilder;
/// use rust_decimal_macros::dec;
///
/// let fund = FundBuilder::new()
///     .name("Growth Fund")
///     .ticker("GRW")
///     .nav(dec!(101.25))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct FundBuilder {
    name: String,
    ticker: String,
    nav: Decimal,
}

impl FundBuilder {
    /// Creates a builder with placeholder values
    pub fn new() -> Self {
        Self {
            name: "Test Fund".to_string(),
            ticker: "TST".to_string(),
            nav: dec!(100.00),
        }
    }

    /// Sets the fund name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the ticker
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    /// Sets the NAV
    pub fn nav(mut self, nav: Decimal) -> Self {
        self.nav = nav;
        self
    }

    /// Builds an unpersisted fund
    pub fn build(self) -> Fund {
        Fund::new(self.name, self.ticker, self.nav)
    }
}

impl Default for FundBuilder {
    fn default() -> Self {
        Self::new()
    }
}
