use crate::scheduler::IntervalScheduler;
use crate::screen::Screen;
use crate::utils::js_random_seed;
use slotmatch_core::{self as game, CellView, Command, GameConfig, GameEngine};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: GameConfig,
    /// Seed for the secret patterns, random when not set
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    IndexInput(String),
    ValueInput(String),
    PatternInput(String),
    Insert,
    Delete,
    Search,
    Reset,
    /// Timer firing, tagged with the interval generation that sent it
    Tick(u64),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: CellView,
}

#[function_component(Cell)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { cell } = props.clone();
    let class = classes!("cell", cell.highlighted.then_some("highlight"));

    html! {
        <div {class}>{cell.text}</div>
    }
}

fn input_callback(ctx: &Context<GameView>, msg: fn(String) -> Msg) -> Callback<InputEvent> {
    ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        msg(input.value())
    })
}

pub(crate) struct GameView {
    engine: GameEngine<IntervalScheduler>,
    screen: Screen,
    index_text: String,
    value_text: String,
    pattern_text: String,
}

impl GameView {
    fn get_state_class(&self) -> Classes {
        use game::RoundState::*;
        classes!(match self.engine.state() {
            Ready => "ready",
            Active => "active",
            Won => "won",
            Expired => "expired",
        })
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let scheduler = IntervalScheduler::new(ctx.link().clone());
        let mut engine = GameEngine::with_seed(config, scheduler, seed);
        let mut screen = Screen::new(config.round_secs);
        engine.dispatch(Command::Init, &mut screen);

        Self {
            engine,
            screen,
            index_text: String::new(),
            value_text: String::new(),
            pattern_text: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            IndexInput(text) => {
                self.index_text = text;
                false
            }
            ValueInput(text) => {
                self.value_text = text;
                false
            }
            PatternInput(text) => {
                self.pattern_text = text;
                false
            }
            Insert => {
                log::debug!("insert {:?} at {:?}", self.value_text, self.index_text);
                let input = game::insert_command(
                    &self.index_text,
                    &self.value_text,
                    self.engine.slot_count(),
                );
                self.engine.dispatch_input(input, &mut self.screen);
                true
            }
            Delete => {
                log::debug!("delete at {:?}", self.index_text);
                let input = game::delete_command(&self.index_text, self.engine.slot_count());
                self.engine.dispatch_input(input, &mut self.screen);
                true
            }
            Search => {
                log::debug!("search {:?}", self.pattern_text);
                let command = Command::Search(self.pattern_text.clone());
                self.engine.dispatch(command, &mut self.screen);
                true
            }
            Reset => {
                log::debug!("reset");
                self.engine.dispatch(Command::Reset, &mut self.screen);
                true
            }
            Tick(generation) => {
                if !self.engine.scheduler().is_current(generation) {
                    log::trace!("dropping tick from stale interval {}", generation);
                    return false;
                }
                self.engine.dispatch(Command::Tick, &mut self.screen)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let state_class = self.get_state_class();
        let feedback_class = classes!("feedback", self.screen.rejected().then_some("error"));
        let link = ctx.link();

        html! {
            <div class={classes!("slotmatch", state_class)}>
                <p class="timer">{self.screen.time()}</p>
                <div class="array">
                    {
                        for self.screen.cells().into_iter().map(|cell| html! {
                            <Cell {cell}/>
                        })
                    }
                </div>
                <div class="controls">
                    <input type="number" placeholder="Index" value={self.index_text.clone()}
                        oninput={input_callback(ctx, IndexInput)}/>
                    <input type="number" placeholder="Value (0-9)" value={self.value_text.clone()}
                        oninput={input_callback(ctx, ValueInput)}/>
                    <button onclick={link.callback(|_| Insert)}>{"Insert"}</button>
                    <button onclick={link.callback(|_| Delete)}>{"Delete"}</button>
                </div>
                <div class="controls">
                    <input type="text" placeholder="Pattern (e.g., 1,2,3)"
                        value={self.pattern_text.clone()}
                        oninput={input_callback(ctx, PatternInput)}/>
                    <button onclick={link.callback(|_| Search)}>{"Search"}</button>
                    <button onclick={link.callback(|_| Reset)}>{"Reset"}</button>
                </div>
                <p class={feedback_class}>{self.screen.status()}</p>
            </div>
        }
    }
}
