//! Disposition options for the contact form select field

/// Nature of the contact inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    ApplicationSupport,
    B2bLead,
    ConciergeServices,
    ConsultantSupport,
    CustomerSupport,
    GeneralEnquiry,
    NewLead,
    Renewals,
}

impl Disposition {
    /// All options in display order
    pub const ALL: [Disposition; 8] = [
        Self::ApplicationSupport,
        Self::B2bLead,
        Self::ConciergeServices,
        Self::ConsultantSupport,
        Self::CustomerSupport,
        Self::GeneralEnquiry,
        Self::NewLead,
        Self::Renewals,
    ];

    /// Label shown in the select and sent on the wire
    pub fn label(self) -> &'static str {
        match self {
            Self::ApplicationSupport => "Application Support",
            Self::B2bLead => "B2B Lead",
            Self::ConciergeServices => "Concierge Services",
            Self::ConsultantSupport => "Consultant support",
            Self::CustomerSupport => "Customer Support",
            Self::GeneralEnquiry => "General Enquiry",
            Self::NewLead => "New Lead",
            Self::Renewals => "Renewals",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }

    /// Step through the options, wrapping at both ends.
    /// An unset select starts at the first option going forward and the last going back.
    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        let count = Self::ALL.len();
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(d), true) => (d.index() + 1) % count,
            (Some(d), false) => (d.index() + count - 1) % count,
        };
        Self::ALL[next]
    }
}
