// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc},
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    error::GatewayError,
    file::Downloads,
    gateway::{Gateway, HttpGateway},
    model::Level,
    session::{Job, Outcome, Session, View},
};

use super::{components, router};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "eCourts Desk",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)?))),
    )?;
    Ok(())
}

pub struct App {
    // options + text-field state (UI thread only)
    pub state: AppState,

    // everything on screen
    pub session: Session,

    gateway: Arc<dyn Gateway>,

    // workers send finished jobs here; drained at the top of each frame
    tx: mpsc::Sender<Outcome>,
    rx: mpsc::Receiver<Outcome>,
    in_flight: usize,
}

impl App {
    pub fn new(state: AppState) -> Result<Self, GatewayError> {
        let gateway = HttpGateway::new(&state.options.api)?;
        logf!("Init: api={}, out={}", gateway.base_url(), state.options.export.out_dir().display());
        Ok(Self::with_gateway(state, Arc::new(gateway)))
    }

    /// Any gateway; the window never learns which.
    pub fn with_gateway(state: AppState, gateway: Arc<dyn Gateway>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state,
            session: Session::new(),
            gateway,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Output directory, after applying any edit still sitting in the text field.
    pub fn downloads(&mut self) -> Downloads {
        self.state.apply_out_dir_text();
        Downloads::new(self.state.options.export.out_dir())
    }

    /// Run `job` on a worker thread. The outcome is applied on a later frame.
    pub fn spawn(&mut self, ctx: &egui::Context, job: Job) {
        let gateway = Arc::clone(&self.gateway);
        let downloads = self.downloads();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let name = job.name();

        self.in_flight += 1;
        logd!("Job: spawn {} (in flight: {})", name, self.in_flight);

        thread::spawn(move || {
            let outcome = job.run(gateway.as_ref(), &downloads);
            if tx.send(outcome).is_err() {
                logd!("Job: {} finished after the window closed", name);
            }
            ctx.request_repaint();
        });
    }

    #[inline]
    pub fn spawn_opt(&mut self, ctx: &egui::Context, job: Option<Job>) {
        if let Some(job) = job {
            self.spawn(ctx, job);
        }
    }

    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.session.apply(outcome);
        }
    }

    /// Switch tabs. Entering Court Data the first time loads the states.
    pub fn switch_view(&mut self, ctx: &egui::Context, view: View) {
        let prev = self.session.view;
        if prev == view {
            return;
        }
        self.session.view = view;
        logf!("UI: Tab switch {:?} → {:?}", prev, view);

        let first_visit = self.session.options(Level::State).is_empty();
        if view == View::CourtDataSelection && first_visit && !self.session.is_loading() {
            let job = self.session.load_states();
            self.spawn(ctx, job);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_outcomes();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("out_dir").show(ctx, |ui| {
            components::out_dir_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::alerts::draw(ui, self);

            router::draw(ui, self);
        });
    }
}
