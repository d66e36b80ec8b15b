//! Pure four-function calculator state machine, kept free of any view code.

const MAX_ENTRY_DIGITS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    None
                } else {
                    Some(lhs / rhs)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcAction {
    Digit(char),
    Decimal,
    Backspace,
    Clear,
    ToggleSign,
    Percent,
    Binary(BinaryOp),
    Equals,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalculatorState {
    entry: String,
    accumulator: Option<f64>,
    pending_op: Option<BinaryOp>,
    replace_entry: bool,
    error: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending_op: None,
            replace_entry: false,
            error: false,
        }
    }
}

impl CalculatorState {
    pub(crate) fn display(&self) -> String {
        if self.error {
            "Error".to_string()
        } else {
            self.entry.clone()
        }
    }

    pub(crate) fn pending_symbol(&self) -> Option<&'static str> {
        self.pending_op.map(BinaryOp::symbol)
    }

    pub(crate) fn apply(&mut self, action: CalcAction) {
        if self.error && action != CalcAction::Clear {
            return;
        }
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::Backspace => self.backspace(),
            CalcAction::Clear => *self = Self::default(),
            CalcAction::ToggleSign => self.toggle_sign(),
            CalcAction::Percent => self.percent(),
            CalcAction::Binary(op) => self.set_binary(op),
            CalcAction::Equals => self.equals(),
        }
    }

    fn entry_value(&self) -> f64 {
        self.entry.parse().unwrap_or(0.0)
    }

    fn set_entry_value(&mut self, value: f64) {
        self.entry = format_value(value);
    }

    fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.replace_entry {
            self.entry = "0".to_string();
            self.replace_entry = false;
        }
        if self.entry.chars().filter(char::is_ascii_digit).count() >= MAX_ENTRY_DIGITS {
            return;
        }
        if self.entry == "0" {
            self.entry = digit.to_string();
        } else {
            self.entry.push(digit);
        }
    }

    fn input_decimal(&mut self) {
        if self.replace_entry {
            self.entry = "0".to_string();
            self.replace_entry = false;
        }
        if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn backspace(&mut self) {
        if self.replace_entry {
            return;
        }
        self.entry.pop();
        if self.entry.is_empty() || self.entry == "-" {
            self.entry = "0".to_string();
        }
    }

    fn toggle_sign(&mut self) {
        if self.entry == "0" {
            return;
        }
        if let Some(rest) = self.entry.strip_prefix('-') {
            self.entry = rest.to_string();
        } else {
            self.entry.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        let value = self.entry_value() / 100.0;
        self.set_entry_value(value);
        self.replace_entry = true;
    }

    fn set_binary(&mut self, op: BinaryOp) {
        // Chained operations evaluate eagerly: 2 + 3 * shows 5 before the
        // multiplication starts.
        if self.pending_op.is_some() && !self.replace_entry {
            self.equals();
            if self.error {
                return;
            }
        }
        self.accumulator = Some(self.entry_value());
        self.pending_op = Some(op);
        self.replace_entry = true;
    }

    fn equals(&mut self) {
        let (Some(op), Some(lhs)) = (self.pending_op, self.accumulator) else {
            return;
        };
        match op.apply(lhs, self.entry_value()) {
            Some(result) => {
                self.set_entry_value(result);
                self.accumulator = None;
                self.pending_op = None;
                self.replace_entry = true;
            }
            None => {
                *self = Self::default();
                self.error = true;
            }
        }
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(state: &mut CalculatorState, actions: &[CalcAction]) {
        for action in actions {
            state.apply(*action);
        }
    }

    #[test]
    fn digits_accumulate_and_leading_zero_is_replaced() {
        let mut state = CalculatorState::default();
        press(
            &mut state,
            &[
                CalcAction::Digit('0'),
                CalcAction::Digit('4'),
                CalcAction::Digit('2'),
            ],
        );
        assert_eq!(state.display(), "42");
    }

    #[test]
    fn addition_with_equals() {
        let mut state = CalculatorState::default();
        press(
            &mut state,
            &[
                CalcAction::Digit('7'),
                CalcAction::Binary(BinaryOp::Add),
                CalcAction::Digit('5'),
                CalcAction::Equals,
            ],
        );
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn chained_operations_evaluate_eagerly() {
        let mut state = CalculatorState::default();
        press(
            &mut state,
            &[
                CalcAction::Digit('2'),
                CalcAction::Binary(BinaryOp::Add),
                CalcAction::Digit('3'),
                CalcAction::Binary(BinaryOp::Multiply),
            ],
        );
        assert_eq!(state.display(), "5");
        press(&mut state, &[CalcAction::Digit('4'), CalcAction::Equals]);
        assert_eq!(state.display(), "20");
    }

    #[test]
    fn decimal_entry_and_formatting() {
        let mut state = CalculatorState::default();
        press(
            &mut state,
            &[
                CalcAction::Digit('1'),
                CalcAction::Decimal,
                CalcAction::Decimal,
                CalcAction::Digit('5'),
                CalcAction::Binary(BinaryOp::Multiply),
                CalcAction::Digit('2'),
                CalcAction::Equals,
            ],
        );
        assert_eq!(state.display(), "3");
    }

    #[test]
    fn divide_by_zero_shows_error_until_cleared() {
        let mut state = CalculatorState::default();
        press(
            &mut state,
            &[
                CalcAction::Digit('8'),
                CalcAction::Binary(BinaryOp::Divide),
                CalcAction::Digit('0'),
                CalcAction::Equals,
            ],
        );
        assert_eq!(state.display(), "Error");

        // Everything except clear is ignored in the error state.
        state.apply(CalcAction::Digit('9'));
        assert_eq!(state.display(), "Error");
        state.apply(CalcAction::Clear);
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn sign_percent_and_backspace() {
        let mut state = CalculatorState::default();
        press(
            &mut state,
            &[
                CalcAction::Digit('5'),
                CalcAction::Digit('0'),
                CalcAction::ToggleSign,
            ],
        );
        assert_eq!(state.display(), "-50");
        state.apply(CalcAction::ToggleSign);
        state.apply(CalcAction::Percent);
        assert_eq!(state.display(), "0.5");

        let mut state = CalculatorState::default();
        press(
            &mut state,
            &[
                CalcAction::Digit('1'),
                CalcAction::Digit('2'),
                CalcAction::Backspace,
            ],
        );
        assert_eq!(state.display(), "1");
        state.apply(CalcAction::Backspace);
        assert_eq!(state.display(), "0");
    }
}
