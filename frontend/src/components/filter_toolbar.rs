//! Filter toolbar driven by a `ListSchema`'s filter categories.
//!
//! The user picks a category, then types a search term (applied on Enter) or
//! picks an option (applied immediately). Active filters show as removable
//! chips. The toolbar only reports changes; the owning page holds the
//! `ViewState` and decides what to fetch.

use std::collections::BTreeMap;

use common::list::{FilterCategory, ListSchema};
use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;

pub struct FilterToolbar {
    category: usize,
    draft: String,
}

#[derive(Properties, PartialEq)]
pub struct FilterToolbarProps {
    pub schema: &'static ListSchema,
    pub active: BTreeMap<String, String>,
    /// `(key, value)`; an empty value removes the filter.
    pub on_change: Callback<(String, String)>,
    pub on_clear: Callback<()>,
}

pub enum Msg {
    SelectCategory(usize),
    Draft(String),
    Apply,
    Choose(String),
}

impl FilterToolbar {
    fn current<'a>(&self, ctx: &'a Context<Self>) -> Option<&'a FilterCategory> {
        ctx.props().schema.filters.get(self.category)
    }
}

impl Component for FilterToolbar {
    type Message = Msg;
    type Properties = FilterToolbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            category: 0,
            draft: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectCategory(index) => {
                self.category = index;
                self.draft.clear();
                true
            }
            Msg::Draft(value) => {
                self.draft = value;
                false
            }
            Msg::Apply => {
                if let Some(category) = self.current(ctx) {
                    ctx.props()
                        .on_change
                        .emit((category.key.to_string(), self.draft.trim().to_string()));
                }
                self.draft.clear();
                true
            }
            Msg::Choose(value) => {
                if let Some(category) = self.current(ctx) {
                    ctx.props().on_change.emit((category.key.to_string(), value));
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let Some(category) = self.current(ctx) else {
            return html! {};
        };

        let on_category = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SelectCategory(select.selected_index().max(0) as usize)
        });

        let input = if category.is_select() {
            let active = props.active.get(category.key).cloned().unwrap_or_default();
            html! {
                <select
                    class="filter-value"
                    aria-label={category.placeholder}
                    onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::Choose(select.value())
                    })}
                >
                    <option value="" selected={active.is_empty()}>{ category.placeholder }</option>
                    { for category.options.iter().map(|(value, label)| html! {
                        <option value={*value} selected={active == *value}>{ *label }</option>
                    }) }
                </select>
            }
        } else {
            html! {
                <input
                    class="filter-value"
                    type="search"
                    placeholder={category.placeholder}
                    aria-label={category.placeholder}
                    value={self.draft.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::Draft(input.value())
                    })}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        (e.key() == "Enter").then_some(Msg::Apply)
                    })}
                />
            }
        };

        html! {
            <div class="filter-toolbar">
                <select class="filter-category" aria-label="Filter category" onchange={on_category}>
                    { for props.schema.filters.iter().enumerate().map(|(i, f)| html! {
                        <option value={f.key} selected={i == self.category}>{ f.title }</option>
                    }) }
                </select>
                { input }
                if !props.active.is_empty() {
                    <div class="filter-chips">
                        { for props.active.iter().map(|(key, value)| {
                            let title = props.schema.filter(key).map(|f| f.title).unwrap_or(key.as_str());
                            let remove_key = key.clone();
                            let on_change = props.on_change.clone();
                            html! {
                                <span class="chip">
                                    { format!("{}: {}", title, value) }
                                    <button
                                        class="chip-remove"
                                        title="Remove filter"
                                        onclick={Callback::from(move |_: MouseEvent| on_change.emit((remove_key.clone(), String::new())))}
                                    >
                                        {"×"}
                                    </button>
                                </span>
                            }
                        }) }
                        <button class="btn link" onclick={props.on_clear.reform(|_: MouseEvent| ())}>{"Clear all filters"}</button>
                    </div>
                }
            </div>
        }
    }
}
