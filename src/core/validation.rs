use crate::core::kinematics::MotorParameters;
use crate::core::linkage::LinkageGeometry;

/// Reads the longest leading decimal number out of `text`.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"12in"` reads as 12. Text without a leading number reads as NaN.
pub fn parse_field(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// True only when every field reads as a number strictly above zero.
pub fn are_values_valid(fields: &[&str]) -> bool {
    fields.iter().all(|field| parse_field(field) > 0.0)
}

/// Raw text of the four static-model inputs, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    pub bar1_length: String,
    pub bar2_length: String,
    pub arm_distance: String,
    pub backdrop_angle: String,
}

impl FormFields {
    pub fn as_array(&self) -> [&str; 4] {
        [
            &self.bar1_length,
            &self.bar2_length,
            &self.arm_distance,
            &self.backdrop_angle,
        ]
    }

    pub fn is_valid(&self) -> bool {
        are_values_valid(&self.as_array())
    }

    /// Parses every field without checking validity; bad text becomes NaN.
    pub fn geometry(&self) -> LinkageGeometry {
        LinkageGeometry {
            bar1_length_in: parse_field(&self.bar1_length),
            bar2_length_in: parse_field(&self.bar2_length),
            arm_distance_in: parse_field(&self.arm_distance),
            backdrop_angle_deg: parse_field(&self.backdrop_angle),
        }
    }
}

/// The static fields plus the motor RPM used by the timed model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotorFormFields {
    pub linkage: FormFields,
    pub motor_rpm: String,
}

impl MotorFormFields {
    pub fn is_valid(&self) -> bool {
        self.linkage.is_valid() && are_values_valid(&[self.motor_rpm.as_str()])
    }

    pub fn geometry(&self) -> LinkageGeometry {
        self.linkage.geometry()
    }

    pub fn motor(&self) -> MotorParameters {
        MotorParameters {
            motor_rpm: parse_field(&self.motor_rpm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: [&str; 4]) -> FormFields {
        FormFields {
            bar1_length: values[0].to_string(),
            bar2_length: values[1].to_string(),
            arm_distance: values[2].to_string(),
            backdrop_angle: values[3].to_string(),
        }
    }

    #[test]
    fn parses_plain_and_decimal_numbers() {
        assert_eq!(parse_field("10"), 10.0);
        assert_eq!(parse_field("12.5"), 12.5);
        assert_eq!(parse_field(".5"), 0.5);
        assert_eq!(parse_field("5."), 5.0);
        assert_eq!(parse_field("-.25"), -0.25);
        assert_eq!(parse_field("+3"), 3.0);
        assert_eq!(parse_field("1.5e2"), 150.0);
        assert_eq!(parse_field("2E-1"), 0.2);
    }

    #[test]
    fn reads_leading_number_and_ignores_rest() {
        assert_eq!(parse_field("  7.5 inches"), 7.5);
        assert_eq!(parse_field("12in"), 12.0);
        assert_eq!(parse_field("3e"), 3.0);
        assert_eq!(parse_field("4e+"), 4.0);
        assert_eq!(parse_field("1.2.3"), 1.2);
        assert_eq!(parse_field("0x10"), 0.0);
    }

    #[test]
    fn reads_infinity() {
        assert_eq!(parse_field("Infinity"), f64::INFINITY);
        assert_eq!(parse_field("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_field("+Infinityxyz"), f64::INFINITY);
    }

    #[test]
    fn non_numbers_read_as_nan() {
        for text in ["", "   ", "abc", ".", "-", "+.", "e5", "inf", "NaN"] {
            assert!(parse_field(text).is_nan(), "text={text:?}");
        }
    }

    #[test]
    fn validity_requires_strictly_positive_fields() {
        assert!(fields(["10", "10", "5", "45"]).is_valid());
        assert!(!fields(["", "10", "5", "45"]).is_valid());
        assert!(!fields(["10", "ten", "5", "45"]).is_valid());
        assert!(!fields(["10", "10", "0", "45"]).is_valid());
        assert!(!fields(["10", "10", "5", "-45"]).is_valid());
        assert!(!fields(["0", "0", "0", "0"]).is_valid());
    }

    #[test]
    fn geometry_keeps_invalid_values() {
        let geometry = fields(["10", "", "-2", "45"]).geometry();
        assert_eq!(geometry.bar1_length_in, 10.0);
        assert!(geometry.bar2_length_in.is_nan());
        assert_eq!(geometry.arm_distance_in, -2.0);
    }

    #[test]
    fn motor_fields_need_positive_rpm() {
        let mut form = MotorFormFields {
            linkage: fields(["10", "10", "5", "45"]),
            motor_rpm: "100".to_string(),
        };
        assert!(form.is_valid());
        assert_eq!(form.motor().motor_rpm, 100.0);

        form.motor_rpm = "0".to_string();
        assert!(!form.is_valid());
        form.motor_rpm = String::new();
        assert!(!form.is_valid());
    }
}
