use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Toggle button with a menu of `(key, label)` items. Disabled without items.
pub struct SimpleDropdown {
    open: bool,
}

#[derive(Properties, PartialEq)]
pub struct SimpleDropdownProps {
    pub label: String,
    #[prop_or_default]
    pub items: Vec<(String, String)>,
    /// Receives the key of the chosen item.
    pub on_select: Callback<String>,
    #[prop_or_else(|| "secondary".to_string())]
    pub variant: String,
    #[prop_or_default]
    pub aria_label: Option<String>,
}

pub enum Msg {
    Toggle,
    Select(String),
}

impl Component for SimpleDropdown {
    type Message = Msg;
    type Properties = SimpleDropdownProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.open = !self.open;
                true
            }
            Msg::Select(key) => {
                self.open = false;
                ctx.props().on_select.emit(key);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let aria_label = props
            .aria_label
            .clone()
            .unwrap_or_else(|| "Dropdown menu".to_string());

        html! {
            <div class={classes!("dropdown", self.open.then_some("open"))}>
                <button
                    class={classes!("btn", props.variant.clone(), "dropdown-toggle")}
                    aria-label={aria_label}
                    aria-expanded={self.open.to_string()}
                    disabled={props.items.is_empty()}
                    onclick={link.callback(|_| Msg::Toggle)}
                >
                    { &props.label }
                    <i class="material-icons">{ if self.open { "expand_less" } else { "expand_more" } }</i>
                </button>
                if self.open {
                    <ul class="dropdown-menu" role="menu">
                        { for props.items.iter().map(|(key, label)| {
                            let key = key.clone();
                            html! {
                                <li role="menuitem">
                                    <button class="dropdown-item" onclick={link.callback(move |_| Msg::Select(key.clone()))}>
                                        { label }
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </div>
        }
    }
}
