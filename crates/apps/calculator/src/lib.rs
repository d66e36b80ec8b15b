//! Four-function calculator app.
//!
//! The evaluation logic lives in [`engine`] as plain data so it can be tested
//! without a DOM; this module only maps button presses onto engine actions.

mod engine;

use desktop_app_contract::AppContent;
use leptos::*;

use engine::{BinaryOp, CalcAction, CalculatorState};

/// Opaque window content handed to the window-manager registry.
pub const CONTENT: AppContent = AppContent::new(mount);

/// Mounts the calculator into a window body.
pub fn mount() -> View {
    view! { <CalculatorApp /> }.into_view()
}

#[derive(Clone, Copy)]
struct CalcKeySpec {
    label: &'static str,
    class_name: &'static str,
    action: CalcAction,
}

const CALC_KEYS: [CalcKeySpec; 19] = [
    CalcKeySpec {
        label: "C",
        class_name: "function",
        action: CalcAction::Clear,
    },
    CalcKeySpec {
        label: "\u{b1}",
        class_name: "function",
        action: CalcAction::ToggleSign,
    },
    CalcKeySpec {
        label: "%",
        class_name: "function",
        action: CalcAction::Percent,
    },
    CalcKeySpec {
        label: "\u{f7}",
        class_name: "operator",
        action: CalcAction::Binary(BinaryOp::Divide),
    },
    CalcKeySpec {
        label: "7",
        class_name: "digit",
        action: CalcAction::Digit('7'),
    },
    CalcKeySpec {
        label: "8",
        class_name: "digit",
        action: CalcAction::Digit('8'),
    },
    CalcKeySpec {
        label: "9",
        class_name: "digit",
        action: CalcAction::Digit('9'),
    },
    CalcKeySpec {
        label: "\u{d7}",
        class_name: "operator",
        action: CalcAction::Binary(BinaryOp::Multiply),
    },
    CalcKeySpec {
        label: "4",
        class_name: "digit",
        action: CalcAction::Digit('4'),
    },
    CalcKeySpec {
        label: "5",
        class_name: "digit",
        action: CalcAction::Digit('5'),
    },
    CalcKeySpec {
        label: "6",
        class_name: "digit",
        action: CalcAction::Digit('6'),
    },
    CalcKeySpec {
        label: "-",
        class_name: "operator",
        action: CalcAction::Binary(BinaryOp::Subtract),
    },
    CalcKeySpec {
        label: "1",
        class_name: "digit",
        action: CalcAction::Digit('1'),
    },
    CalcKeySpec {
        label: "2",
        class_name: "digit",
        action: CalcAction::Digit('2'),
    },
    CalcKeySpec {
        label: "3",
        class_name: "digit",
        action: CalcAction::Digit('3'),
    },
    CalcKeySpec {
        label: "+",
        class_name: "operator",
        action: CalcAction::Binary(BinaryOp::Add),
    },
    CalcKeySpec {
        label: "0",
        class_name: "digit zero",
        action: CalcAction::Digit('0'),
    },
    CalcKeySpec {
        label: ".",
        class_name: "digit",
        action: CalcAction::Decimal,
    },
    CalcKeySpec {
        label: "=",
        class_name: "operator equals",
        action: CalcAction::Equals,
    },
];

#[component]
/// Calculator window contents.
pub fn CalculatorApp() -> impl IntoView {
    let state = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let action = match ev.key().as_str() {
            digit @ ("0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9") => {
                CalcAction::Digit(digit.chars().next().unwrap_or('0'))
            }
            "." | "," => CalcAction::Decimal,
            "+" => CalcAction::Binary(BinaryOp::Add),
            "-" => CalcAction::Binary(BinaryOp::Subtract),
            "*" => CalcAction::Binary(BinaryOp::Multiply),
            "/" => CalcAction::Binary(BinaryOp::Divide),
            "=" | "Enter" => CalcAction::Equals,
            "Backspace" => CalcAction::Backspace,
            "Escape" => CalcAction::Clear,
            "%" => CalcAction::Percent,
            _ => return,
        };
        ev.prevent_default();
        state.update(|s| s.apply(action));
    };

    view! {
        <div class="calculator-app" tabindex="0" on:keydown=on_keydown>
            <div class="calculator-display" role="status" aria-live="polite">
                <span class="calculator-pending">
                    {move || state.get().pending_symbol().unwrap_or("")}
                </span>
                <span class="calculator-entry">{move || state.get().display()}</span>
            </div>
            <div class="calculator-keys">
                {CALC_KEYS
                    .iter()
                    .map(|key| {
                        let action = key.action;
                        view! {
                            <button
                                type="button"
                                class=format!("calculator-key {}", key.class_name)
                                on:click=move |_| state.update(|s| s.apply(action))
                            >
                                {key.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
