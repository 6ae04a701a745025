use std::marker::PhantomData;
use std::time::Duration;
use std::{cmp, fmt, ops};

use crate::Sign;


/// Converts kilometers to meters.
pub const METERS_PER_KM: f64 = 1000.;

/// A dimensioned value.
///
/// `Base` is the base dimension (length, angle),
/// and `Dt` is the number of times the base is differentiated with respect to time.
/// All internal representations are in SI units.
pub struct Quantity<T, Base, Dt>(pub T, pub PhantomData<(Base, Dt)>);

impl<Base, Dt> Quantity<f64, Base, Dt> {
    pub const ZERO: Self = Self(0., PhantomData);
}

impl<T: Clone, Base, Dt> Clone for Quantity<T, Base, Dt> {
    fn clone(&self) -> Self { Self(self.0.clone(), PhantomData) }
}

impl<T: Copy, Base, Dt> Copy for Quantity<T, Base, Dt> {}

impl<T: PartialEq, Base, Dt> PartialEq for Quantity<T, Base, Dt> {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}

impl<T: PartialOrd, Base, Dt> PartialOrd for Quantity<T, Base, Dt> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

impl<T: ops::Add<Output = T>, Base, Dt> ops::Add for Quantity<T, Base, Dt> {
    type Output = Self;

    fn add(self, other: Self) -> Self { Self(self.0 + other.0, PhantomData) }
}

impl<T: ops::Sub<Output = T>, Base, Dt> ops::Sub for Quantity<T, Base, Dt> {
    type Output = Self;

    fn sub(self, other: Self) -> Self { Self(self.0 - other.0, PhantomData) }
}

impl<T: ops::Mul<f64, Output = T>, Base, Dt> ops::Mul<f64> for Quantity<T, Base, Dt> {
    type Output = Self;

    fn mul(self, other: f64) -> Self { Self(self.0 * other, PhantomData) }
}

impl<T: ops::Div<f64, Output = T>, Base, Dt> ops::Div<f64> for Quantity<T, Base, Dt> {
    type Output = Self;

    fn div(self, other: f64) -> Self { Self(self.0 / other, PhantomData) }
}

/// Used as `Dt` in `Quantity` to indicate that the unit is not a rate of change.
pub struct DtZero;
/// Used as `Dt` in `Quantity` to indicate that the unit is the rate of change of `Quantity<Dt=Dt>`.
pub struct Ddt<Dt>(Dt);

pub type DtOne = Ddt<DtZero>;
pub type DtTwo = Ddt<DtOne>;
pub type DtThree = Ddt<DtTwo>;

/// Integrates a rate over a time span.
impl<T, Base, Dt> ops::Mul<Duration> for Quantity<T, Base, Ddt<Dt>>
where
    T: ops::Mul<f64, Output = T>,
{
    type Output = Quantity<T, Base, Dt>;

    fn mul(self, rhs: Duration) -> Self::Output { Quantity(self.0 * rhs.as_secs_f64(), PhantomData) }
}

/// Average rate of change over a time span.
impl<T, Base, Dt> ops::Div<Duration> for Quantity<T, Base, Dt>
where
    T: ops::Div<f64, Output = T>,
{
    type Output = Quantity<T, Base, Ddt<Dt>>;

    fn div(self, rhs: Duration) -> Self::Output { Quantity(self.0 / rhs.as_secs_f64(), PhantomData) }
}

impl<Base, Dt> Quantity<f64, Base, Dt> {
    /// Time required to cover `self` at the constant `rate`.
    ///
    /// Returns `None` if the quotient is negative or not finite,
    /// including when `rate` is zero.
    #[must_use]
    pub fn try_div(self, rate: Quantity<f64, Base, Ddt<Dt>>) -> Option<Duration> {
        Duration::try_from_secs_f64(self.0 / rate.0).ok()
    }

    #[must_use]
    pub fn is_negative(self) -> bool { self.0 < 0. }

    #[must_use]
    pub fn is_finite(self) -> bool { self.0.is_finite() }

    #[must_use]
    pub fn sign(self) -> Sign {
        if self.0 > 0. {
            Sign::Positive
        } else if self.0 < 0. {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    #[must_use]
    pub fn abs(self) -> Self { Self(self.0.abs(), PhantomData) }

    /// Asserts that the quantity is within `epsilon` of `other`.
    ///
    /// # Errors
    /// If the absolute difference between `self` and `other` is greater than `epsilon`,
    /// or if either side is NaN.
    pub fn assert_approx(self, other: Self, epsilon: Self) -> Result<(), AssertApproxError<Self>>
    where
        Self: fmt::Debug,
    {
        if (self - other).abs() <= epsilon {
            Ok(())
        } else {
            Err(AssertApproxError { actual: self, expect: other, epsilon })
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("expected {expect:?} \u{b1} {epsilon:?}, got {actual:?}")]
pub struct AssertApproxError<T: fmt::Debug> {
    pub actual:  T,
    pub expect:  T,
    pub epsilon: T,
}

pub struct LengthBase;

/// A distance quantity. Internal representation is in meters.
pub type Length<T> = Quantity<T, LengthBase, DtZero>;

/// A linear speed (rate of [length](Length) change) quantity.
pub type Speed<T> = Quantity<T, LengthBase, DtOne>;

/// A linear acceleration (rate of linear [speed](Speed) change) quantity.
pub type Accel<T> = Quantity<T, LengthBase, DtTwo>;

/// Rate of linear [acceleration](Accel) change, i.e. jerk.
pub type AccelRate<T> = Quantity<T, LengthBase, DtThree>;

pub struct AngleBase;

/// A relative angle. Internal representation is in radians.
pub type Angle = Quantity<f64, AngleBase, DtZero>;

impl fmt::Debug for Length<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length").field("meters", &self.0).finish()
    }
}

impl fmt::Debug for Speed<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speed").field("m/s", &self.0).finish()
    }
}

impl fmt::Debug for Accel<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accel").field("m/s2", &self.0).finish()
    }
}

impl fmt::Debug for AccelRate<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccelRate").field("m/s3", &self.0).finish()
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Angle").field("degrees", &self.into_degrees()).finish()
    }
}

impl Length<f64> {
    #[must_use]
    pub const fn from_meters(meters: f64) -> Self { Self(meters, PhantomData) }

    #[must_use]
    pub const fn into_meters(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_km(km: f64) -> Self { Self(km * METERS_PER_KM, PhantomData) }
}

impl Speed<f64> {
    #[must_use]
    pub const fn from_meters_per_sec(mps: f64) -> Self { Self(mps, PhantomData) }

    #[must_use]
    pub const fn into_meters_per_sec(self) -> f64 { self.0 }
}

impl Accel<f64> {
    #[must_use]
    pub const fn from_meters_per_sec2(mps2: f64) -> Self { Self(mps2, PhantomData) }

    #[must_use]
    pub const fn into_meters_per_sec2(self) -> f64 { self.0 }
}

impl AccelRate<f64> {
    #[must_use]
    pub const fn from_meters_per_sec3(mps3: f64) -> Self { Self(mps3, PhantomData) }

    #[must_use]
    pub const fn into_meters_per_sec3(self) -> f64 { self.0 }
}

impl Angle {
    #[must_use]
    pub const fn into_radians(self) -> f64 { self.0 }

    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self { Self(degrees.to_radians(), PhantomData) }

    #[must_use]
    pub fn into_degrees(self) -> f64 { self.0.to_degrees() }

    #[must_use]
    pub fn sin(self) -> f64 { self.0.sin() }

    #[must_use]
    pub fn cos(self) -> f64 { self.0.cos() }
}

impl<T: serde::Serialize, Base, Dt> serde::Serialize for Quantity<T, Base, Dt> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, Base, Dt> serde::Deserialize<'de> for Quantity<f64, Base, Dt> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;

        if !value.is_finite() {
            return Err(<D::Error as serde::de::Error>::custom("non-finite quantity"));
        }

        Ok(Self(value, PhantomData))
    }
}
