use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// Overlay dialog sliding in from the top of the page.
///
/// Mounted while open and unmounted on close: owners render it conditionally,
/// so nothing inside survives a close.
pub struct ModalTopSheet {
    pub id: String,
    shown: bool,
    _show_timer: Option<Timeout>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
    /// Footer buttons. A "Close" button is rendered when empty.
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub wide: bool,
}

pub enum Msg {
    Show,
}

impl Component for ModalTopSheet {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            shown: false,
            _show_timer: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show => {
                self.shown = true;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            // Mount hidden, then add `show` so the slide-in transition runs.
            let link = ctx.link().clone();
            self._show_timer = Some(Timeout::new(50, move || link.send_message(Msg::Show)));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_: MouseEvent| ());
        let title_id = format!("{}-title", self.id);
        let class = match (self.shown, props.wide) {
            (true, true) => "top-sheet wide show",
            (true, false) => "top-sheet show",
            (false, true) => "top-sheet wide",
            (false, false) => "top-sheet",
        };

        html! {
            <div class="top-sheet-backdrop">
                <div class={class} id={self.id.clone()} role="dialog" aria-modal="true" aria-labelledby={title_id.clone()}>
                    <header class="top-sheet-header">
                        <h2 id={title_id}>{ &props.title }</h2>
                        <button class="icon-btn" title="Close" onclick={on_close.clone()}>
                            <i class="material-icons">{"close"}</i>
                        </button>
                    </header>
                    <div class="top-sheet-body">
                        { props.children.clone() }
                    </div>
                    <footer class="top-sheet-footer">
                        {
                            match &props.actions {
                                Some(actions) => actions.clone(),
                                None => html! { <button class="btn secondary" onclick={on_close}>{"Close"}</button> },
                            }
                        }
                    </footer>
                </div>
            </div>
        }
    }
}
