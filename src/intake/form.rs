//! Line-based terminal form. Prompts one field at a time; blank answers take
//! the configured default, unparseable answers re-prompt.

use super::{parse_yes_no, Gender, OrdinalLevel, RawInput};
use crate::config::FormConfig;
use crate::features::{
    AGE_RANGE, DIASTOLIC_RANGE, HEIGHT_RANGE, SYSTOLIC_RANGE, WEIGHT_RANGE,
};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

pub struct FormReader<'a> {
    defaults: &'a FormConfig,
}

impl<'a> FormReader<'a> {
    pub fn new(defaults: &'a FormConfig) -> Self {
        Self { defaults }
    }

    /// Read one complete submission. Returns `None` when input ends before
    /// the form is complete.
    pub fn read_submission<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> std::io::Result<Option<RawInput>> {
        let d = self.defaults;

        let Some(age) = prompt_number(input, out, "Age (years)", &AGE_RANGE, d.default_age)?
        else {
            return Ok(None);
        };
        let Some(gender) = prompt_parsed(input, out, "Gender (male/female)", Gender::Male)?
        else {
            return Ok(None);
        };
        let Some(height_cm) =
            prompt_number(input, out, "Height (cm)", &HEIGHT_RANGE, d.default_height_cm)?
        else {
            return Ok(None);
        };
        let Some(weight_kg) =
            prompt_number(input, out, "Weight (kg)", &WEIGHT_RANGE, d.default_weight_kg)?
        else {
            return Ok(None);
        };
        let Some(systolic_bp) = prompt_number(
            input,
            out,
            "Systolic blood pressure",
            &SYSTOLIC_RANGE,
            d.default_systolic_bp,
        )?
        else {
            return Ok(None);
        };
        let Some(diastolic_bp) = prompt_number(
            input,
            out,
            "Diastolic blood pressure",
            &DIASTOLIC_RANGE,
            d.default_diastolic_bp,
        )?
        else {
            return Ok(None);
        };
        let Some(cholesterol) = prompt_parsed(
            input,
            out,
            "Cholesterol (normal/high/very high)",
            OrdinalLevel::Normal,
        )?
        else {
            return Ok(None);
        };
        let Some(glucose) = prompt_parsed(
            input,
            out,
            "Glucose (normal/high/very high)",
            OrdinalLevel::Normal,
        )?
        else {
            return Ok(None);
        };
        let Some(smoker) = prompt_yes_no(input, out, "Smoker (yes/no)")? else {
            return Ok(None);
        };
        let Some(alcohol) = prompt_yes_no(input, out, "Alcohol consumption (yes/no)")? else {
            return Ok(None);
        };
        let Some(physically_active) =
            prompt_yes_no(input, out, "Physically active (yes/no)")?
        else {
            return Ok(None);
        };

        Ok(Some(RawInput {
            age,
            gender,
            height_cm,
            weight_kg,
            systolic_bp,
            diastolic_bp,
            cholesterol,
            glucose,
            smoker,
            alcohol,
            physically_active,
        }))
    }
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    range: &RangeInclusive<u32>,
    default: u32,
) -> std::io::Result<Option<u32>> {
    loop {
        write!(
            out,
            "{} [{}-{}] (default {}): ",
            label,
            range.start(),
            range.end(),
            default
        )?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(default));
        }
        match line.parse::<u32>() {
            Ok(v) if range.contains(&v) => return Ok(Some(v)),
            Ok(v) => writeln!(
                out,
                "{} is outside [{}-{}], try again",
                v,
                range.start(),
                range.end()
            )?,
            Err(_) => writeln!(out, "not a number: {}", line)?,
        }
    }
}

fn prompt_parsed<T, R, W>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: T,
) -> std::io::Result<Option<T>>
where
    T: FromStr + Copy,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{}: ", label)?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(default));
        }
        match line.parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => writeln!(out, "unrecognized answer: {}", line)?,
        }
    }
}

fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> std::io::Result<Option<bool>> {
    loop {
        write!(out, "{}: ", label)?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(false));
        }
        match parse_yes_no(&line) {
            Some(v) => return Ok(Some(v)),
            None => writeln!(out, "answer yes or no")?,
        }
    }
}
