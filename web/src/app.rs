use clap::Args;
use recallo_core as game;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::element::ElementView;
use crate::menu::MenuView;
use crate::scheduler::TimerScheduler;
use crate::utils::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Submit,
    Click(game::ElementId),
    Run(game::Task),
    Restart,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Milliseconds between two shuffles
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_SHUFFLE_PERIOD_MS)]
    pub period: u32,

    /// Milliseconds between a click and checking the sequence
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_VALIDATION_DELAY_MS)]
    pub delay: u32,

    /// Language of the message table
    #[arg(long, default_value = "en")]
    pub lang: String,
}

impl GameProps {
    fn config(&self) -> game::GameConfig {
        game::GameConfig::default()
            .with_shuffle_period(self.period)
            .with_validation_delay(self.delay)
    }
}

pub(crate) struct GameView {
    controller: game::Controller,
    scheduler: TimerScheduler,
    input: NodeRef,
}

impl GameView {
    fn read_input(&self) -> String {
        self.input
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn clear_input(&self) {
        if let Some(input) = self.input.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    fn show_notices(&mut self) {
        for id in self.controller.take_notices() {
            let text = self.controller.message(id);
            log::debug!("notice {:?}: {}", id, text);
            gloo::dialogs::alert(text);
        }
    }

    fn view_round(&self, ctx: &Context<Self>, round: &game::Round) -> Html {
        use game::MessageId::*;

        let lost = round.state() == game::RoundState::Lost;
        let metrics = self.controller.config().metrics;
        let onclick = ctx.link().callback(Msg::Click);

        html! {
            <div class={classes!("board", lost.then_some("lost"))}>
                {
                    for round.iter().map(|(id, element)| html! {
                        <ElementView
                            key={id.0}
                            {id}
                            element={element.clone()}
                            {metrics}
                            settled={lost}
                            onclick={onclick.clone()}
                        />
                    })
                }
                if lost {
                    <>
                        <h1>{self.controller.message(CorrectOrder).to_string()}</h1>
                        <input
                            type="submit"
                            value={self.controller.message(PlayAgain).to_string()}
                            onclick={ctx.link().callback(|_| Msg::Restart)}
                        />
                    </>
                }
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        Self {
            controller: game::Controller::new(
                props.config(),
                game::Messages::for_language(&props.lang),
                seed,
            ),
            scheduler: TimerScheduler::new(ctx.link().clone()),
            input: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Submit => {
                let input = self.read_input();
                match self
                    .controller
                    .submit(&input, viewport(), &mut self.scheduler)
                {
                    Ok(size) => log::debug!("round of {} started", size),
                    Err(err) => {
                        log::debug!("menu input {:?} rejected: {}", input, err);
                        self.clear_input();
                    }
                }
                true
            }
            Click(id) => match self.controller.click(id, &mut self.scheduler) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::warn!("click on {}: {}", id, err);
                    false
                }
            },
            Run(task) => self.controller.run(task, viewport(), &mut self.scheduler),
            Restart => {
                self.controller.restart(&mut self.scheduler);
                true
            }
        };

        self.show_notices();
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::MessageId::*;

        match self.controller.screen() {
            game::Screen::Menu => html! {
                <MenuView
                    prompt={self.controller.message(ButtonNum).to_string()}
                    go={self.controller.message(Go).to_string()}
                    input={self.input.clone()}
                    onsubmit={ctx.link().callback(|_| Msg::Submit)}
                />
            },
            game::Screen::Round(round) => self.view_round(ctx, round),
        }
    }
}
