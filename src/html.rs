//! Shared page layout, Tailwind class lists and number formatting for the views.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

pub const LINK_STYLE: &str = "font-medium text-indigo-600 hover:text-indigo-500 \
    dark:text-indigo-400 dark:hover:text-indigo-300 hover:underline";

pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2.5 rounded-md font-semibold \
    text-white bg-indigo-600 hover:bg-indigo-500 dark:bg-indigo-500 \
    dark:hover:bg-indigo-400 focus-visible:outline-2 focus-visible:outline-offset-2 \
    focus-visible:outline-indigo-600";

pub const BUTTON_DELETE_STYLE: &str = "font-medium text-rose-600 hover:text-rose-500 \
    dark:text-rose-400 dark:hover:text-rose-300 hover:underline cursor-pointer";

pub const FORM_CONTAINER_STYLE: &str = "w-full max-w-md mx-auto px-6 py-8 \
    text-slate-900 dark:text-slate-100";
pub const FORM_LABEL_STYLE: &str = "block mb-1.5 text-sm font-medium text-slate-700 dark:text-slate-200";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full rounded-md px-3 py-2 text-sm \
    text-slate-900 dark:text-slate-100 bg-white dark:bg-slate-800 \
    ring-1 ring-inset ring-slate-300 dark:ring-slate-600 \
    focus:ring-2 focus:ring-indigo-600 dark:focus:ring-indigo-400";
pub const FORM_RADIO_GROUP_STYLE: &str = "grid grid-cols-2 gap-3";
pub const FORM_RADIO_INPUT_STYLE: &str = "peer sr-only";
pub const FORM_RADIO_LABEL_STYLE: &str = "block cursor-pointer rounded-md px-3 py-2 \
    text-center text-sm font-medium ring-1 ring-slate-300 dark:ring-slate-600 \
    text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700 \
    peer-checked:ring-2 peer-checked:ring-indigo-600 peer-checked:text-indigo-700 \
    dark:peer-checked:ring-indigo-400 dark:peer-checked:text-indigo-200";

pub const TABLE_HEADER_STYLE: &str = "text-xs uppercase tracking-wide text-slate-600 \
    bg-slate-100 dark:bg-slate-700 dark:text-slate-300";
pub const TABLE_ROW_STYLE: &str = "border-b border-slate-200 dark:border-slate-700 \
    odd:bg-white even:bg-slate-50 dark:odd:bg-slate-800 dark:even:bg-slate-800/60";
pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

pub const CATEGORY_BADGE_STYLE: &str = "inline-block rounded-md px-2 py-0.5 text-xs \
    font-medium text-indigo-700 bg-indigo-50 ring-1 ring-inset ring-indigo-200 \
    dark:text-indigo-200 dark:bg-indigo-900/40 dark:ring-indigo-700";

pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col items-center px-4 py-6 \
    sm:px-6 text-slate-900 dark:text-slate-100";

/// Tailwind's play CDN compiles the utility classes used by the views in the browser.
const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";

/// Extra elements a page adds to the document head.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    #[allow(dead_code)]
    ScriptLink(String),
    /// An inline stylesheet.
    Style(PreEscaped<String>),
}

/// Wrap `content` in the HTML document shared by every page.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Budget Tracker" }
                script src=(TAILWIND_SCRIPT) {}

                @for element in head_elements {
                    @match element {
                        HeadElement::ScriptLink(path) => script src=(path) {},
                        HeadElement::Style(text) => style { (text) },
                    }
                }
            }

            body class="min-h-screen bg-slate-50 dark:bg-slate-900 antialiased"
            {
                (content)
            }
        }
    }
}

/// A full page for errors: a large status `header`, what went wrong and how
/// to fix it, and a link back to the transaction list.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html! {
        main class="grid min-h-screen place-items-center px-6 py-24"
        {
            div class="max-w-xl text-center"
            {
                p data-status-code="true" class="text-6xl font-black text-indigo-600 dark:text-indigo-400"
                {
                    (header)
                }

                h1 class="mt-4 text-3xl font-bold tracking-tight text-slate-900 dark:text-white"
                {
                    (description)
                }

                p class="mt-4 text-lg text-slate-600 dark:text-slate-300" { (fix) }

                a href="/" class="mt-8 inline-block rounded-md bg-indigo-600 px-4 py-2.5
                    text-sm font-semibold text-white hover:bg-indigo-500"
                {
                    "Back to Transactions"
                }
            }
        }
    };

    base(title, &[], &content)
}

/// Styles for number inputs wrapped in `.input-wrapper`, which show a
/// dollar sign in front of the value.
pub fn dollar_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper { position: relative; }
        .input-wrapper input[type="number"] { padding-left: 1.5rem; }
        .input-wrapper::before {
            content: '$';
            position: absolute;
            left: 0.65rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
            opacity: 0.7;
        }
        "#
        .to_owned(),
    ))
}

/// Format `amount` as dollars with thousands separators and exactly two
/// decimal places, e.g. "$1,234.50" or "-$12.00".
pub fn format_currency(amount: f64) -> String {
    static FORMATTER: OnceLock<Option<Formatter>> = OnceLock::new();

    let magnitude = amount.abs();
    if magnitude < 0.005 {
        return "$0.00".to_owned();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let formatted = FORMATTER
        .get_or_init(|| {
            Formatter::currency("$")
                .ok()
                .map(|formatter| formatter.precision(Precision::Decimals(2)))
        })
        .as_ref()
        .map(|formatter| formatter.fmt_string(magnitude))
        .unwrap_or_else(|| format!("${magnitude:.2}"));

    format!("{sign}{}", pad_cents(&formatted))
}

/// numfmt drops trailing zeros after the decimal point, e.g. "$12.3" or "$12".
fn pad_cents(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((dollars, cents)) => format!("{dollars}.{cents:0<2}"),
        None => format!("{formatted}.00"),
    }
}

/// Text colour for an amount: red for money out, green for money in.
pub fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "text-rose-700 dark:text-rose-300"
    } else {
        "text-emerald-700 dark:text-emerald-300"
    }
}
