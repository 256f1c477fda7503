use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

/// Exact rational number, always stored reduced with a positive denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = num.gcd(&den);
        let (num, den) = (num / &g, den / &g);

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn from_int(value: i64) -> Self {
        Self {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }

    pub fn recip(&self) -> Self {
        Fraction::new(self.den.clone(), self.num.clone())
    }
}

impl FromStr for Fraction {
    type Err = String;

    // "a/b" or "a"
    fn from_str(s: &str) -> Result<Self, String> {
        let mut parts = s.split('/');
        let num = parts.next().ok_or("No number")?.trim();
        let den = parts.next().unwrap_or("1").trim();
        if parts.next().is_some() {
            return Err("Invalid fraction".into());
        }

        let den = BigInt::parse_bytes(den.as_bytes(), 10).ok_or("Invalid number")?;
        if den.is_zero() {
            return Err("Denominator cannot be zero".into());
        }

        Ok(Fraction::new(
            BigInt::parse_bytes(num.as_bytes(), 10).ok_or("Invalid number")?,
            den,
        ))
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction::from_int(value)
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from_int(1)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from_int(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{} / {}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl Eq for Fraction {}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        // denominators are positive, cross multiplication keeps the order
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
