use crate::utils::error::{InventoryError, Result};
use std::fmt;
use std::io::{BufRead, Write};
use std::ops::Range;

/// A value that can be typed at a prompt.
pub trait InputValue: Sized + Clone + PartialOrd + fmt::Display {
    /// Name shown in the "Input type must be ..." message.
    const TYPE_NAME: &'static str;

    fn parse_input(raw: &str) -> Option<Self>;
}

impl InputValue for i32 {
    const TYPE_NAME: &'static str = "int";

    fn parse_input(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl InputValue for f64 {
    const TYPE_NAME: &'static str = "float";

    fn parse_input(raw: &str) -> Option<Self> {
        // nan / inf 視為型別錯誤
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl InputValue for String {
    const TYPE_NAME: &'static str = "str";

    fn parse_input(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

#[derive(Debug, Clone)]
pub enum Membership<T> {
    /// Half-open, like `start..stop`.
    Range(Range<T>),
    OneOf(Vec<T>),
}

/// Limits applied to a parsed value, checked in the order maximum, minimum,
/// membership. Only the first failure is reported.
#[derive(Debug, Clone)]
pub struct Constraint<T> {
    min: Option<T>,
    max: Option<T>,
    membership: Option<Membership<T>>,
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            membership: None,
        }
    }
}

impl<T: InputValue> Constraint<T> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn at_least(min: T) -> Self {
        Self::default().with_min(min)
    }

    pub fn at_most(max: T) -> Self {
        Self::default().with_max(max)
    }

    /// Inclusive on both ends.
    pub fn bounded(min: T, max: T) -> Self {
        Self::default().with_min(min).with_max(max)
    }

    pub fn between(range: Range<T>) -> Self {
        Self {
            membership: Some(Membership::Range(range)),
            ..Self::default()
        }
    }

    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<T>,
    {
        Self {
            membership: Some(Membership::OneOf(values.into_iter().map(Into::into).collect())),
            ..Self::default()
        }
    }

    pub fn with_min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Rejects a constraint no value could ever satisfy through its bounds.
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (&self.min, &self.max) {
            if max < min {
                return Err(InventoryError::InvalidConstraintError {
                    message: format!("maximum {} is less than minimum {}", max, min),
                });
            }
        }
        Ok(())
    }

    /// Returns the message to show when `value` violates the constraint.
    pub fn check(&self, value: &T) -> std::result::Result<(), String> {
        if let Some(max) = &self.max {
            if value > max {
                return Err(format!("Input must be less than or equal to {}.", max));
            }
        }
        if let Some(min) = &self.min {
            if value < min {
                return Err(format!("Input must be greater than or equal to {}.", min));
            }
        }
        match &self.membership {
            Some(Membership::Range(range)) if !range.contains(value) => Err(format!(
                "Input must be between {} and {}.",
                range.start, range.end
            )),
            Some(Membership::OneOf(values)) if !values.contains(value) => {
                Err(format!("Input must be {}.", describe_choices(values)))
            }
            _ => Ok(()),
        }
    }
}

fn describe_choices<T: fmt::Display>(values: &[T]) -> String {
    match values {
        [] => String::new(),
        [only] => only.to_string(),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} or {}", head, last)
        }
    }
}

/// Prompts on `writer` and reads lines from `reader` until a value parses and
/// satisfies its constraint. There is no retry limit; only end of input or an
/// I/O failure ends the loop early.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn read<T: InputValue>(&mut self, prompt: &str, constraint: &Constraint<T>) -> Result<T> {
        constraint.validate()?;

        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(InventoryError::InputClosed);
            }
            // 非 UTF-8 的輸入和型別錯誤一樣重新詢問
            let Ok(line) = String::from_utf8(buf) else {
                tracing::debug!(prompt, "input was not valid UTF-8");
                writeln!(self.writer, "Input type must be {}.", T::TYPE_NAME)?;
                continue;
            };
            let raw = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

            let Some(value) = T::parse_input(raw) else {
                tracing::debug!(prompt, raw, "input did not parse as {}", T::TYPE_NAME);
                writeln!(self.writer, "Input type must be {}.", T::TYPE_NAME)?;
                continue;
            };

            match constraint.check(&value) {
                Ok(()) => return Ok(value),
                Err(message) => {
                    tracing::debug!(prompt, raw, "input rejected: {}", message);
                    writeln!(self.writer, "{}", message)?;
                }
            }
        }
    }

    pub fn read_text(&mut self, prompt: &str) -> Result<String> {
        self.read(prompt, &Constraint::none())
    }

    /// Shared access to the output side for callers printing between prompts.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
