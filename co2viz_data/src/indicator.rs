// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well-known indicator keys, as written by the data-preparation scripts.

/// GDP per capita (current US$).
pub const GDP: &str = "GDP Data";
/// CO2 emissions (kt).
pub const CO2: &str = "CO2 Data";
/// Total population.
pub const POPULATION: &str = "Population Data";

/// Agricultural land (sq. km).
pub const AGRICULTURAL_LAND: &str = "Agricultural land (sq. km)";
/// Methane emissions (kt of CO2 equivalent).
pub const METHANE_EMISSIONS: &str = "Methane emissions (kt of CO2 equivalent)";
/// Other greenhouse gas emissions (% change from 1990).
pub const OTHER_GHG_EMISSIONS: &str = "Other greenhouse gas emissions (% change from 1990)";
/// Energy use (kg of oil equivalent per capita).
pub const ENERGY_USE: &str = "Energy use (kg of oil equivalent per capita)";
/// Electric power consumption (kWh per capita).
pub const POWER_CONSUMPTION: &str = "Electric power consumption (kWh per capita)";
/// Forest area (sq. km).
pub const FOREST_AREA: &str = "Forest area (sq. km)";
/// Cereal yield (kg per hectare).
pub const CEREAL_YIELD: &str = "Cereal yield (kg per hectare)";
/// Improved water source (% of population with access).
pub const WATER_ACCESS: &str = "Improved water source (% of population with access)";
