use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a published electricity generation series.
///
/// The twelve generation categories are summed for the recent-past window;
/// [`SeriesId::TotalGenerationForecast`] is only consulted for the future window.
/// Each variant carries the numeric filter code under which the statistics API
/// publishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum SeriesId {
    /// Generation from biomass.
    Biomass,
    /// Generation from hydropower.
    Hydropower,
    /// Generation from offshore wind.
    WindOffshore,
    /// Generation from onshore wind.
    WindOnshore,
    /// Generation from photovoltaics.
    Photovoltaic,
    /// Generation from other renewable sources.
    OtherRenewable,
    /// Generation from nuclear energy.
    Nuclear,
    /// Generation from brown coal (lignite).
    BrownCoal,
    /// Generation from hard coal.
    HardCoal,
    /// Generation from natural gas.
    NaturalGas,
    /// Generation from pumped storage.
    PumpStorage,
    /// Generation from other conventional sources.
    OtherConventional,

    /// Forecast of total generation (prognosis).
    TotalGenerationForecast,
}

impl SeriesId {
    /// All generation categories in canonical order.
    ///
    /// The order is stable and determines which series provides timestamps
    /// when positional alignment is used.
    pub const GENERATION: [Self; 12] = [
        Self::Biomass,
        Self::Hydropower,
        Self::WindOffshore,
        Self::WindOnshore,
        Self::Photovoltaic,
        Self::OtherRenewable,
        Self::Nuclear,
        Self::BrownCoal,
        Self::HardCoal,
        Self::NaturalGas,
        Self::PumpStorage,
        Self::OtherConventional,
    ];

    /// Numeric filter code used by the publishing API for this series.
    #[must_use]
    pub const fn filter_code(self) -> u32 {
        match self {
            Self::Biomass => 4066,
            Self::Hydropower => 1226,
            Self::WindOffshore => 1225,
            Self::WindOnshore => 4067,
            Self::Photovoltaic => 4068,
            Self::OtherRenewable => 1228,
            Self::Nuclear => 1224,
            Self::BrownCoal => 1223,
            Self::HardCoal => 4069,
            Self::NaturalGas => 4071,
            Self::PumpStorage => 4070,
            Self::OtherConventional => 1227,
            Self::TotalGenerationForecast => 122,
        }
    }

    /// Look up a series by its numeric filter code.
    #[must_use]
    pub fn from_filter_code(code: u32) -> Option<Self> {
        Self::GENERATION
            .into_iter()
            .chain(core::iter::once(Self::TotalGenerationForecast))
            .find(|id| id.filter_code() == code)
    }

    /// True for the forecast series, false for measured generation categories.
    #[must_use]
    pub const fn is_forecast(self) -> bool {
        matches!(self, Self::TotalGenerationForecast)
    }

    /// Stable kebab-case label, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biomass => "biomass",
            Self::Hydropower => "hydropower",
            Self::WindOffshore => "wind-offshore",
            Self::WindOnshore => "wind-onshore",
            Self::Photovoltaic => "photovoltaic",
            Self::OtherRenewable => "other-renewable",
            Self::Nuclear => "nuclear",
            Self::BrownCoal => "brown-coal",
            Self::HardCoal => "hard-coal",
            Self::NaturalGas => "natural-gas",
            Self::PumpStorage => "pump-storage",
            Self::OtherConventional => "other-conventional",
            Self::TotalGenerationForecast => "total-generation-forecast",
        }
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
