// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use cosmic::iced_futures::stream;
use cosmic::{
    ApplicationExt, Element, Task, app,
    cosmic_theme::Spacing,
    iced::{
        Alignment, Background, Length, Size, Subscription,
        futures::{SinkExt, StreamExt, channel::mpsc},
        widget::{canvas, column},
        window,
    },
    iced_runtime::core::layout::Limits,
    theme,
    widget::{container, dropdown, text},
};
use logind_zbus::manager::ManagerProxy;
use tokio::time;

use crate::{
    config::{APP_ID, ClockAppletConfig},
    error::Error,
    face::ClockFace,
    fl,
    geometry::{CANVAS_SIZE, TEXT_COLOR, WINDOW_BACKGROUND},
    state::ClockState,
};

const WINDOW_WIDTH: f32 = 500.0;
const WINDOW_HEIGHT: f32 = 600.0;

pub fn settings() -> app::Settings {
    let size = Size::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    app::Settings::default().size(size).size_limits(
        Limits::NONE
            .min_width(size.width)
            .max_width(size.width)
            .min_height(size.height)
            .max_height(size.height),
    )
}

pub struct Window {
    core: cosmic::app::Core,
    state: ClockState,
    names: Vec<&'static str>,
    clock: ClockFace,
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    SelectTimezone(usize),
    ConfigChanged(ClockAppletConfig),
    CloseRequested(window::Id),
}

impl Window {
    fn tick(&mut self) {
        match self.state.tick(chrono::Utc::now()) {
            Ok(Some(angles)) => self.clock.set_hands(angles),
            Ok(None) => {}
            Err(err) => {
                tracing::error!(%err, "Failed to update clock hands; retrying on next tick");
            }
        }
    }

    fn status(&self) -> Option<String> {
        self.state.error().map(|err| match err {
            Error::InvalidTimezone(timezone) => {
                fl!("invalid-timezone", timezone = timezone.as_str())
            }
            _ => err.to_string(),
        })
    }

    fn update_title(&mut self) -> app::Task<Message> {
        let title = fl!("clock");
        self.set_header_title(title.clone());
        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(title, id)
        } else {
            Task::none()
        }
    }
}

impl cosmic::Application for Window {
    type Message = Message;
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = ();
    const APP_ID: &'static str = APP_ID;

    fn init(core: app::Core, _flags: Self::Flags) -> (Self, app::Task<Self::Message>) {
        let state = ClockState::default();
        let names = state.registry().names();

        let mut window = Self {
            core,
            state,
            names,
            clock: ClockFace::default(),
        };

        // Draw the hands before the first timer tick arrives.
        window.tick();
        let task = window.update_title();

        (window, task)
    }

    fn core(&self) -> &cosmic::app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::app::Core {
        &mut self.core
    }

    fn subscription(&self) -> Subscription<Message> {
        fn time_subscription() -> Subscription<Message> {
            Subscription::run_with_id(
                "time-sub",
                stream::channel(1, |mut output| async move {
                    let period = time::Duration::from_secs(1);
                    let mut timer = time::interval_at(time::Instant::now() + period, period);
                    timer.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

                    loop {
                        timer.tick().await;
                        if let Err(err) = output.send(Message::Tick).await {
                            tracing::error!(?err, "Failed sending tick request to clock");
                        }
                    }
                }),
            )
        }

        // Update the hands right away when waking from sleep
        async fn wake_from_sleep(output: &mut mpsc::Sender<Message>) -> zbus::Result<()> {
            let connection = zbus::Connection::system().await?;
            let proxy = ManagerProxy::new(&connection).await?;

            while let Some(property) = proxy.receive_prepare_for_sleep().await?.next().await {
                let waking = !property.args()?.start();
                if waking {
                    let _ = output.send(Message::Tick).await;
                }
            }
            Ok(())
        }

        fn wake_from_sleep_subscription() -> Subscription<Message> {
            Subscription::run_with_id(
                "wake-from-suspend-sub",
                stream::channel(1, |mut output| async move {
                    if let Err(err) = wake_from_sleep(&mut output).await {
                        tracing::error!(?err, "Failed to subscribe to wake-from-sleep signal");
                    }
                }),
            )
        }

        let config = self.core.watch_config(APP_ID).map(|u| {
            for err in u.errors {
                tracing::error!(?err, "Error watching config");
            }
            Message::ConfigChanged(u.config)
        });

        if self.state.is_ticking() {
            Subscription::batch([
                time_subscription(),
                wake_from_sleep_subscription(),
                config,
            ])
        } else {
            config
        }
    }

    fn update(&mut self, message: Self::Message) -> app::Task<Self::Message> {
        match message {
            Message::Tick => self.tick(),
            Message::SelectTimezone(index) => {
                if let Err(err) = self.state.select(index) {
                    tracing::error!(%err, "Ignoring timezone selection");
                } else {
                    tracing::debug!(timezone = self.state.selected_name(), "Timezone selected");
                }
                return self.update(Message::Tick);
            }
            Message::ConfigChanged(c) => self.state.set_military_time(c.military_time),
            Message::CloseRequested(id) => {
                if Some(id) == self.core.main_window_id() {
                    self.state.stop();
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let Spacing {
            space_xs, space_s, ..
        } = theme::active().cosmic().spacing;
        let picker = dropdown(
            self.names.as_slice(),
            Some(self.state.selected_index()),
            Message::SelectTimezone,
        );

        let face = canvas(&self.clock)
            .width(Length::Fixed(CANVAS_SIZE))
            .height(Length::Fixed(CANVAS_SIZE));

        let mut content = column![
            text(fl!("select-timezone")).size(12),
            picker,
            face,
            text(self.state.digital()).size(16),
        ]
        .spacing(space_xs)
        .padding([space_s, 0])
        .align_x(Alignment::Center);

        if let Some(status) = self.status() {
            content = content.push(text::caption(status));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .class(theme::Container::custom(|_| cosmic::iced_widget::container::Style {
                background: Some(Background::Color(WINDOW_BACKGROUND.into())),
                text_color: Some(TEXT_COLOR.into()),
                ..Default::default()
            }))
            .into()
    }

    fn on_close_requested(&self, id: window::Id) -> Option<Message> {
        Some(Message::CloseRequested(id))
    }
}
