//! Read-only payslip catalog, fixed at process start.

use serde::{Deserialize, Serialize};

/// Monthly compensation breakdown; amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    pub month: String,
    pub basic: i64,
    pub hra: i64,
    pub conveyance: i64,
    pub medical: i64,
    pub deductions: i64,
}

impl Payslip {
    pub fn new(month: &str, basic: i64, hra: i64, conveyance: i64, medical: i64, deductions: i64) -> Self {
        Self { month: month.to_string(), basic, hra, conveyance, medical, deductions }
    }

    pub fn total_earnings(&self) -> i64 {
        self.basic + self.hra + self.conveyance + self.medical
    }

    pub fn net_pay(&self) -> i64 {
        self.total_earnings() - self.deductions
    }
}

/// Immutable list of payslips in insertion order. Share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PayslipCatalog {
    payslips: Vec<Payslip>,
}

impl PayslipCatalog {
    pub fn new(payslips: Vec<Payslip>) -> Self { Self { payslips } }

    pub fn list_payslips(&self) -> &[Payslip] { &self.payslips }

    pub fn len(&self) -> usize { self.payslips.len() }

    pub fn is_empty(&self) -> bool { self.payslips.is_empty() }
}

impl Default for PayslipCatalog {
    /// The 2025 payroll year shown in the portal.
    fn default() -> Self {
        Self::new(vec![
            Payslip::new("January 2025", 50000, 15000, 3000, 2000, 5000),
            Payslip::new("February 2025", 51000, 15200, 3000, 2100, 5200),
            Payslip::new("March 2025", 52000, 15300, 3100, 2200, 5300),
            Payslip::new("April 2025", 53000, 15400, 3100, 2200, 5400),
            Payslip::new("May 2025", 54000, 15500, 3200, 2300, 5500),
            Payslip::new("June 2025", 55000, 15600, 3200, 2300, 5600),
            Payslip::new("July 2025", 56000, 15700, 3300, 2400, 5700),
            Payslip::new("August 2025", 57000, 15800, 3300, 2400, 5800),
            Payslip::new("September 2025", 58000, 15900, 3400, 2500, 5900),
            Payslip::new("October 2025", 59000, 16000, 3400, 2500, 6000),
            Payslip::new("November 2025", 60000, 16100, 3500, 2600, 6100),
            Payslip::new("December 2025", 61000, 16200, 3500, 2600, 6200),
        ])
    }
}
