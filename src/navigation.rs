//! The navigation bar shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the navigation bar, highlighted when it points at the current page.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "rounded-md px-3 py-2 text-sm font-semibold text-indigo-700 bg-indigo-50 \
            dark:text-indigo-200 dark:bg-indigo-900/40"
        } else {
            "rounded-md px-3 py-2 text-sm font-medium text-slate-700 \
            hover:bg-slate-100 dark:text-slate-200 dark:hover:bg-slate-700"
        };

        html!( a href=(self.url) class=(style) aria-current=[self.is_current.then_some("page")] { (self.title) } )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// The navigation bar with the link to `active_endpoint`, if any, marked
    /// as the current page.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::TRANSACTIONS_VIEW,
                title: "Transactions",
                is_current: active_endpoint == endpoints::TRANSACTIONS_VIEW,
            },
            Link {
                url: endpoints::NEW_TRANSACTION_VIEW,
                title: "Add Transaction",
                is_current: active_endpoint == endpoints::NEW_TRANSACTION_VIEW,
            },
            Link {
                url: endpoints::EXPORT,
                title: "Export",
                is_current: false,
            },
        ];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html! {
            nav class="border-b border-slate-200 bg-white dark:border-slate-700 dark:bg-slate-900"
            {
                div class="mx-auto flex max-w-5xl flex-wrap items-center justify-between gap-4 px-4 py-3"
                {
                    a href=(endpoints::TRANSACTIONS_VIEW)
                        class="text-lg font-bold text-slate-900 dark:text-white"
                    {
                        "Budget Tracker"
                    }

                    ul class="flex flex-wrap gap-2"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        }
    }
}
