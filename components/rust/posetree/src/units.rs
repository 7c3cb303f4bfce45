//! Copyright 2024 Gareth Cross
//!
//! Runtime length units. Quantities themselves are `uom` values; a [`LengthUnit`] records which
//! unit a frame offset or position stores its raw coordinates in.
use std::fmt;

use uom::si::angle::radian;
use uom::si::f64::{Angle, Length};
use uom::si::length;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Micrometer,
    Nanometer,
    Inch,
    Foot,
    Yard,
    Mile,
    AstronomicalUnit,
}

impl LengthUnit {
    /// Wrap a raw `value` expressed in this unit.
    pub fn length(self, value: f64) -> Length {
        match self {
            LengthUnit::Meter => Length::new::<length::meter>(value),
            LengthUnit::Kilometer => Length::new::<length::kilometer>(value),
            LengthUnit::Centimeter => Length::new::<length::centimeter>(value),
            LengthUnit::Millimeter => Length::new::<length::millimeter>(value),
            LengthUnit::Micrometer => Length::new::<length::micrometer>(value),
            LengthUnit::Nanometer => Length::new::<length::nanometer>(value),
            LengthUnit::Inch => Length::new::<length::inch>(value),
            LengthUnit::Foot => Length::new::<length::foot>(value),
            LengthUnit::Yard => Length::new::<length::yard>(value),
            LengthUnit::Mile => Length::new::<length::mile>(value),
            LengthUnit::AstronomicalUnit => Length::new::<length::astronomical_unit>(value),
        }
    }

    /// Raw value of `quantity` in this unit.
    pub fn value(self, quantity: Length) -> f64 {
        match self {
            LengthUnit::Meter => quantity.get::<length::meter>(),
            LengthUnit::Kilometer => quantity.get::<length::kilometer>(),
            LengthUnit::Centimeter => quantity.get::<length::centimeter>(),
            LengthUnit::Millimeter => quantity.get::<length::millimeter>(),
            LengthUnit::Micrometer => quantity.get::<length::micrometer>(),
            LengthUnit::Nanometer => quantity.get::<length::nanometer>(),
            LengthUnit::Inch => quantity.get::<length::inch>(),
            LengthUnit::Foot => quantity.get::<length::foot>(),
            LengthUnit::Yard => quantity.get::<length::yard>(),
            LengthUnit::Mile => quantity.get::<length::mile>(),
            LengthUnit::AstronomicalUnit => quantity.get::<length::astronomical_unit>(),
        }
    }

    /// Factor that converts a raw value in `from` into a raw value in `to`.
    pub fn conversion(from: LengthUnit, to: LengthUnit) -> f64 {
        if from == to {
            1.0
        } else {
            to.value(from.length(1.0))
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Nanometer => "nm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
            LengthUnit::AstronomicalUnit => "au",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[inline(always)]
pub(crate) fn radians(angle: Angle) -> f64 {
    angle.get::<radian>()
}

#[inline(always)]
pub(crate) fn angle(radians: f64) -> Angle {
    Angle::new::<radian>(radians)
}
