use std::collections::HashSet;

use eframe::{App, Frame, CreationContext, egui};
use egui::{Ui, ScrollArea, RichText, Color32, Layout, Align, Stroke};
use egui::text::{CCursor, CCursorRange};
use tracing_subscriber::EnvFilter;

mod config;
mod form;
mod list_view;
mod models;
mod session;
use config::{AppConfig, FormDefaults};
use form::{Field, NewWorkoutForm, SubmitOutcome};
use list_view::{SessionListView, WorkoutCard, EMPTY_MESSAGE};
use models::WorkoutId;
use session::SessionStore;

const GREEN: Color32 = Color32::from_rgb(0x21, 0xce, 0x99);
const RED: Color32 = Color32::from_rgb(0xf4, 0x55, 0x31);
const CARD_FILL: Color32 = Color32::from_rgb(0x1b, 0x1b, 0x1d);
const INPUT_FILL: Color32 = Color32::from_rgb(0x12, 0x12, 0x13);

fn main() -> Result<(), eframe::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::load_or_default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    let title = config.window.title.clone();
    tracing::info!(%title, "starting workout session");
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(WorkoutApp::new(cc, config)))),
    )
}

/// What the user did with the new-workout form this frame.
#[derive(PartialEq, Clone, Copy)]
enum FormAction {
    Idle,
    Done,
    Cancel,
}

struct WorkoutApp {
    store: SessionStore,
    new_workout: Option<NewWorkoutForm>,
    form_defaults: FormDefaults,
    collapsed: HashSet<WorkoutId>,
}

impl WorkoutApp {
    fn new(cc: &CreationContext, config: AppConfig) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(28.0, egui::FontFamily::Proportional),
        );
        cc.egui_ctx.set_style(style);

        Self::with_config(config)
    }

    fn with_config(config: AppConfig) -> Self {
        WorkoutApp {
            store: SessionStore::new(),
            new_workout: None,
            form_defaults: config.form,
            collapsed: HashSet::new(),
        }
    }

    /// Opens the form unless one is already open.
    fn open_new_workout(&mut self) {
        if self.new_workout.is_none() {
            tracing::debug!("new workout form opened");
            self.new_workout = Some(NewWorkoutForm::new(&self.form_defaults));
        }
    }

    fn submit_new_workout(&mut self) {
        if let Some(form) = self.new_workout.as_mut() {
            match form.submit(&mut self.store) {
                SubmitOutcome::Committed(_) => self.new_workout = None,
                SubmitOutcome::Rejected { focus, .. } => {
                    tracing::debug!(?focus, "new workout form kept open");
                }
            }
        }
    }

    fn cancel_new_workout(&mut self) {
        if self.new_workout.take().is_some() {
            tracing::debug!("new workout form cancelled");
        }
    }

    fn toggle_card(&mut self, id: WorkoutId) {
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
    }
}

impl App for WorkoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down_justified(Align::Center), |ui| {
                ui.add_space(10.0);
                ui.label(
                    RichText::new("Your Current Session")
                        .heading()
                        .strong(),
                );
                ui.label(
                    RichText::new(format!(
                        "Started {} · {} workouts",
                        self.store.started_at().format("%H:%M"),
                        self.store.len()
                    ))
                    .weak(),
                );
                ui.add_space(20.0);

                ScrollArea::vertical().show(ui, |ui| {
                    self.show_session_list(ui);

                    let action = match self.new_workout.as_mut() {
                        Some(form) => show_new_workout_form(ui, form),
                        None => FormAction::Idle,
                    };
                    match action {
                        FormAction::Done => self.submit_new_workout(),
                        FormAction::Cancel => self.cancel_new_workout(),
                        FormAction::Idle => {}
                    }
                    // keep the last card clear of the floating button
                    ui.add_space(80.0);
                });
            });
        });

        egui::Area::new(egui::Id::new("new_workout_fab"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                let fab = egui::Button::new(RichText::new("+").size(28.0).color(Color32::WHITE))
                    .fill(GREEN)
                    .min_size(egui::vec2(48.0, 48.0));
                if ui.add(fab).on_hover_text("New workout").clicked() {
                    self.open_new_workout();
                }
            });
    }
}

impl WorkoutApp {
    fn show_session_list(&mut self, ui: &mut Ui) {
        match SessionListView::project(&self.store, self.new_workout.is_some()) {
            SessionListView::Cards(cards) => {
                for card in &cards {
                    let expanded = !self.collapsed.contains(&card.id);
                    if show_workout_card(ui, card, expanded) {
                        self.toggle_card(card.id);
                    }
                    ui.add_space(10.0);
                }
            }
            SessionListView::Empty => {
                ui.add_space(30.0);
                ui.label(RichText::new(EMPTY_MESSAGE).size(22.0));
            }
            SessionListView::Nothing => {}
        }
    }
}

/// Draws one workout card. Returns true when its header was clicked.
fn show_workout_card(ui: &mut Ui, card: &WorkoutCard, expanded: bool) -> bool {
    let mut toggled = false;
    egui::Frame::group(ui.style()).fill(CARD_FILL).show(ui, |ui| {
        let header = ui
            .horizontal(|ui| {
                ui.label(RichText::new(&card.display).size(24.0).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let chevron = if expanded { "⏷" } else { "⏵" };
                    ui.label(RichText::new(chevron).color(GREEN));
                });
            })
            .response
            .interact(egui::Sense::click());
        toggled = header.clicked();

        if expanded {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                let stats = [("Sets", &card.sets), ("Reps", &card.reps), ("Weight", &card.weight)];
                for (label, value) in stats {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(label).weak());
                        ui.label(RichText::new(value.as_str()).size(22.0).strong());
                    });
                    ui.add_space(20.0);
                }
            });
            ui.label(RichText::new(format!("added {}", card.added_at)).small().weak());
        }
    });
    toggled
}

fn show_new_workout_form(ui: &mut Ui, form: &mut NewWorkoutForm) -> FormAction {
    let focus = form.take_focus_request();
    let mut action = FormAction::Idle;

    egui::Frame::group(ui.style()).fill(CARD_FILL).show(ui, |ui| {
        show_field_input(ui, form, Field::Name, focus, 240.0);
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            for field in [Field::Sets, Field::Reps, Field::Weight] {
                ui.vertical(|ui| {
                    ui.label(field.label());
                    show_field_input(ui, form, field, focus, 48.0);
                });
                ui.add_space(20.0);
            }
        });

        if !form.invalid_fields().is_empty() {
            let missing: Vec<&str> = form.invalid_fields().iter().map(|f| f.label()).collect();
            ui.label(RichText::new(format!("Required: {}", missing.join(", "))).color(RED));
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let done = egui::Button::new(RichText::new("Done").color(Color32::WHITE))
                .fill(GREEN)
                .min_size(egui::vec2(112.0, 48.0));
            if ui.add(done).clicked() {
                action = FormAction::Done;
            }
            let cancel = egui::Button::new(RichText::new("Cancel").color(Color32::WHITE))
                .fill(RED)
                .min_size(egui::vec2(112.0, 48.0));
            if ui.add(cancel).clicked() {
                action = FormAction::Cancel;
            }
        });
    });
    action
}

/// One bordered text input. The border turns red while the field is flagged.
fn show_field_input(
    ui: &mut Ui,
    form: &mut NewWorkoutForm,
    field: Field,
    focus: Option<Field>,
    width: f32,
) {
    let border = if form.has_error(field) { RED } else { Color32::WHITE };
    let mut text = form.draft().value(field).to_string();

    egui::Frame::default()
        .fill(INPUT_FILL)
        .stroke(Stroke::new(2.0, border))
        .show(ui, |ui| {
            let output = egui::TextEdit::singleline(&mut text)
                .desired_width(width)
                .frame(false)
                .show(ui);

            if focus == Some(field) {
                output.response.request_focus();
            }
            if field == Field::Name && output.response.gained_focus() {
                let mut state = output.state.clone();
                let end = CCursor::new(text.chars().count());
                state.cursor.set_char_range(Some(CCursorRange::two(CCursor::new(0), end)));
                state.store(ui.ctx(), output.response.id);
            }
            if output.response.changed() {
                form.set_field(field, &text);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> WorkoutApp {
        WorkoutApp::with_config(AppConfig::default())
    }

    fn fill_weight(app: &mut WorkoutApp, weight: &str) {
        if let Some(form) = app.new_workout.as_mut() {
            form.set_field(Field::Weight, weight);
        }
    }

    #[test]
    fn opening_twice_keeps_the_same_form() {
        let mut app = app();
        app.open_new_workout();
        fill_weight(&mut app, "45");
        app.open_new_workout();

        let form = app.new_workout.as_ref().unwrap();
        assert_eq!(form.draft().weight, "45");
    }

    #[test]
    fn cancel_closes_form_without_adding() {
        let mut app = app();
        app.open_new_workout();
        fill_weight(&mut app, "45");

        app.cancel_new_workout();

        assert!(app.new_workout.is_none());
        assert!(app.store.is_empty());
    }

    #[test]
    fn done_with_valid_input_closes_form() {
        let mut app = app();
        app.open_new_workout();
        fill_weight(&mut app, "135");

        app.submit_new_workout();

        assert!(app.new_workout.is_none());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.workouts()[0].display, "New Workout");
        assert_eq!(app.store.workouts()[0].weight, "135");
    }

    #[test]
    fn done_with_blank_field_keeps_form_open() {
        let mut app = app();
        app.open_new_workout();

        app.submit_new_workout();

        let form = app.new_workout.as_ref().unwrap();
        assert!(form.has_error(Field::Weight));
        assert!(app.store.is_empty());
    }

    #[test]
    fn form_uses_configured_defaults() {
        let mut config = AppConfig::default();
        config.form.name = "Squat".to_string();
        let mut app = WorkoutApp::with_config(config);

        app.open_new_workout();

        assert_eq!(app.new_workout.as_ref().unwrap().draft().name, "Squat");
    }

    #[test]
    fn toggle_card_flips_collapsed_state() {
        let mut app = app();
        let id = app.store.next_id();

        app.toggle_card(id);
        assert!(app.collapsed.contains(&id));
        app.toggle_card(id);
        assert!(!app.collapsed.contains(&id));
    }
}
