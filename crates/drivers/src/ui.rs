use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use eframe::egui::{
    self, pos2, vec2, Align2, Color32, ColorImage, FontId, Rect, Sense, TextureHandle,
    TextureOptions, Vec2,
};
use gospoil_application::{
    AppController, AppEvent, Notice, NoticeLevel, PosterDecoder, Screen, Session,
};
use gospoil_domain::{GestureTracker, PointerGesture};
use tracing::warn;

const DETAIL_POSTER_MAX: (u32, u32) = (260, 400);
const THUMB_MAX: (u32, u32) = (160, 240);
const ENLARGED_MAX: (u32, u32) = (520, 780);
const THUMB_GAP: f32 = 12.0;
const STRIP_PADDING: f32 = 10.0;

/// A decoded poster bound to the file it came from. `texture` is `None` when
/// the file could not be decoded.
struct PosterTexture {
    path: PathBuf,
    texture: Option<TextureHandle>,
}

impl PosterTexture {
    fn load(
        ctx: &egui::Context,
        decoder: &dyn PosterDecoder,
        path: &Path,
        (max_width, max_height): (u32, u32),
    ) -> Self {
        let texture = match decoder.decode_poster(path, max_width, max_height) {
            Ok(poster) => {
                let image = ColorImage::from_rgba_unmultiplied(
                    [poster.width as usize, poster.height as usize],
                    &poster.rgba,
                );
                Some(ctx.load_texture(
                    path.display().to_string(),
                    image,
                    TextureOptions::LINEAR,
                ))
            }
            Err(error) => {
                warn!(%error, path = %path.display(), "poster could not be decoded");
                None
            }
        };
        Self {
            path: path.to_path_buf(),
            texture,
        }
    }
}

struct PendingEvent {
    event: AppEvent,
    label: &'static str,
    shown: bool,
}

/// Orders view events for the controller. An event with a busy label waits
/// until its overlay has been painted once; events behind it queue up in
/// emission order.
#[derive(Default)]
struct EventScheduler {
    pending: Option<PendingEvent>,
    backlog: VecDeque<AppEvent>,
}

impl EventScheduler {
    fn submit(&mut self, event: AppEvent) {
        self.backlog.push_back(event);
    }

    /// Events that can run now, in order.
    fn ready(&mut self) -> Vec<AppEvent> {
        let mut ready = Vec::new();
        if let Some(pending) = self.pending.take_if(|pending| pending.shown) {
            ready.push(pending.event);
        }
        if self.pending.is_some() {
            return ready;
        }
        while let Some(event) = self.backlog.pop_front() {
            match event.busy_label() {
                Some(label) => {
                    self.pending = Some(PendingEvent {
                        event,
                        label,
                        shown: false,
                    });
                    break;
                }
                None => ready.push(event),
            }
        }
        ready
    }

    fn is_idle(&self) -> bool {
        self.pending.is_none() && self.backlog.is_empty()
    }

    /// Label of the overlay to paint this frame. The waiting event runs on
    /// the next call to `ready`.
    fn show_busy(&mut self) -> Option<&'static str> {
        let pending = self.pending.as_mut()?;
        pending.shown = true;
        Some(pending.label)
    }
}

/// Everything the view owns between frames. Textures are replaced whenever
/// the session points at a different file and dropped when not shown.
#[derive(Default)]
struct ViewState {
    query: String,
    summary_draft: String,
    detail_poster: Option<PosterTexture>,
    enlarged_poster: Option<PosterTexture>,
    gallery_thumbs: Vec<PosterTexture>,
    gallery_offset: f32,
    gesture: GestureTracker,
    notices: VecDeque<Notice>,
}

impl ViewState {
    fn sync_textures(
        &mut self,
        ctx: &egui::Context,
        session: &Session,
        decoder: &dyn PosterDecoder,
    ) {
        let wanted_detail = session
            .selection
            .as_ref()
            .and_then(|selection| selection.poster.as_deref());
        replace_texture(
            &mut self.detail_poster,
            wanted_detail,
            ctx,
            decoder,
            DETAIL_POSTER_MAX,
        );
        replace_texture(
            &mut self.enlarged_poster,
            session.enlarged_poster().map(PathBuf::as_path),
            ctx,
            decoder,
            ENLARGED_MAX,
        );

        if session.screen == Screen::SearchDetail {
            self.gallery_thumbs.clear();
            self.gallery_offset = 0.0;
            return;
        }
        let loaded: Vec<&PathBuf> = self.gallery_thumbs.iter().map(|thumb| &thumb.path).collect();
        if !loaded.iter().copied().eq(session.gallery.iter()) {
            self.gallery_thumbs = session
                .gallery
                .iter()
                .map(|path| PosterTexture::load(ctx, decoder, path, THUMB_MAX))
                .collect();
            self.gallery_offset = 0.0;
        }
    }
}

fn replace_texture(
    slot: &mut Option<PosterTexture>,
    wanted: Option<&Path>,
    ctx: &egui::Context,
    decoder: &dyn PosterDecoder,
    max: (u32, u32),
) {
    let current = slot.as_ref().map(|poster| poster.path.as_path());
    if current == wanted {
        return;
    }
    *slot = wanted.map(|path| PosterTexture::load(ctx, decoder, path, max));
}

pub struct GoSpoilApp {
    controller: AppController,
    decoder: Box<dyn PosterDecoder>,
    view: ViewState,
    scheduler: EventScheduler,
}

impl GoSpoilApp {
    pub fn new(controller: AppController, decoder: Box<dyn PosterDecoder>) -> Self {
        Self {
            controller,
            decoder,
            view: ViewState::default(),
            scheduler: EventScheduler::default(),
        }
    }

    fn run_ready(&mut self) {
        for event in self.scheduler.ready() {
            self.run(event);
        }
    }

    fn run(&mut self, event: AppEvent) {
        self.controller.dispatch(event);
        self.view.notices.extend(self.controller.take_notices());
    }
}

impl eframe::App for GoSpoilApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_ready();

        self.view
            .sync_textures(ctx, self.controller.session(), self.decoder.as_ref());
        // Queued edits still hold the newest text; keep the draft until they run.
        if self.scheduler.is_idle() {
            self.view.summary_draft = self
                .controller
                .session()
                .selection
                .as_ref()
                .and_then(|selection| selection.summary.clone())
                .unwrap_or_default();
        }

        let mut events = Vec::new();
        let session = self.controller.session();
        match session.screen {
            Screen::SearchDetail => show_search_detail(ctx, session, &mut self.view, &mut events),
            Screen::Gallery => show_gallery(ctx, session, &mut self.view, &mut events),
            Screen::Enlarged { .. } => show_enlarged(ctx, &self.view, &mut events),
        }
        for event in events {
            self.scheduler.submit(event);
        }
        self.run_ready();

        show_notice(ctx, &mut self.view.notices);
        if let Some(label) = self.scheduler.show_busy() {
            show_busy_overlay(ctx, label);
            ctx.request_repaint();
        }
    }
}

fn show_search_detail(
    ctx: &egui::Context,
    session: &Session,
    view: &mut ViewState,
    events: &mut Vec<AppEvent>,
) {
    egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Search movie title:");
            let response = ui.add(egui::TextEdit::singleline(&mut view.query).desired_width(360.0));
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search").clicked() || entered {
                events.push(AppEvent::Search(view.query.clone()));
            }
            if ui.button("Clear").clicked() {
                view.query.clear();
                events.push(AppEvent::Clear);
            }
            ui.separator();
            if ui.button("Poster gallery").clicked() {
                events.push(AppEvent::OpenGallery);
            }
        });
    });

    let selected_index = session
        .selection
        .as_ref()
        .map(|selection| selection.result_index);
    egui::SidePanel::left("results")
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label("Search results:");
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (index, result) in session.results.iter().enumerate() {
                        let selected = selected_index == Some(index);
                        if ui.selectable_label(selected, result.label()).clicked() {
                            events.push(AppEvent::Select(index));
                        }
                    }
                });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            match session.selection.as_ref() {
                Some(selection) => ui.heading(selection.detail.heading()),
                None => ui.heading("Select a movie"),
            };
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Export TXT").clicked() {
                    events.push(AppEvent::Export);
                }
                if ui.button("Quick Spoil").clicked() {
                    events.push(AppEvent::QuickSpoil);
                }
                if ui.button("Generate Summary").clicked() {
                    events.push(AppEvent::GenerateSummary);
                }
            });
        });
        ui.separator();

        if let Some(selection) = session.selection.as_ref() {
            ui.horizontal_top(|ui| {
                match view.detail_poster.as_ref().and_then(|poster| poster.texture.as_ref()) {
                    Some(texture) => {
                        ui.image((texture.id(), texture.size_vec2()));
                    }
                    None => {
                        ui.label("Poster\nunavailable");
                    }
                }
                let info = selection.detail.info_text();
                let mut info = info.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut info)
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );
            });
        }

        ui.add_space(6.0);
        ui.label("AI Summary:");
        let response = ui.add(
            egui::TextEdit::multiline(&mut view.summary_draft)
                .desired_rows(12)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            events.push(AppEvent::EditSummary(view.summary_draft.clone()));
        }
    });
}

fn show_gallery(
    ctx: &egui::Context,
    session: &Session,
    view: &mut ViewState,
    events: &mut Vec<AppEvent>,
) {
    egui::TopBottomPanel::top("gallery_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Back to search").clicked() {
                events.push(AppEvent::BackToSearch);
            }
            ui.label(format!("{} cached posters", session.gallery.len()));
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        if view.gallery_thumbs.is_empty() {
            ui.label("No posters cached yet. Select a movie to download its poster.");
            return;
        }

        let slot_width = THUMB_MAX.0 as f32 + THUMB_GAP;
        let strip_height = THUMB_MAX.1 as f32 + 2.0 * STRIP_PADDING;
        let (rect, response) =
            ui.allocate_exact_size(vec2(ui.available_width(), strip_height), Sense::hover());
        let content_width = slot_width * view.gallery_thumbs.len() as f32;
        let max_offset = (content_width - rect.width()).max(0.0);

        let (pressed, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        if let Some(pos) = pointer {
            if pressed && response.hovered() {
                view.gesture.press(pos.x, pos.y);
            } else if released {
                if let Some(PointerGesture::Click { x, .. }) = view.gesture.release(pos.x, pos.y) {
                    let index = ((x - rect.left() + view.gallery_offset) / slot_width) as usize;
                    if index < view.gallery_thumbs.len() {
                        events.push(AppEvent::Enlarge(index));
                    }
                }
            } else if let Some(dx) = view.gesture.motion(pos.x, pos.y) {
                view.gallery_offset = (view.gallery_offset - dx).clamp(0.0, max_offset);
            }
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_gray(18));
        for (index, thumb) in view.gallery_thumbs.iter().enumerate() {
            let left = rect.left() + index as f32 * slot_width - view.gallery_offset;
            let slot = Rect::from_min_size(
                pos2(left, rect.top() + STRIP_PADDING),
                vec2(THUMB_MAX.0 as f32, THUMB_MAX.1 as f32),
            );
            if !slot.intersects(rect) {
                continue;
            }
            match thumb.texture.as_ref() {
                Some(texture) => {
                    let size = fit(texture.size_vec2(), slot.size());
                    let image_rect = Rect::from_center_size(slot.center(), size);
                    painter.image(
                        texture.id(),
                        image_rect,
                        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                None => {
                    painter.rect_filled(slot, 0.0, Color32::from_gray(48));
                    painter.text(
                        slot.center(),
                        Align2::CENTER_CENTER,
                        "unavailable",
                        FontId::proportional(14.0),
                        Color32::LIGHT_GRAY,
                    );
                }
            }
        }

        ui.label("Drag to scroll, click a poster to enlarge it.");
    });
}

fn show_enlarged(ctx: &egui::Context, view: &ViewState, events: &mut Vec<AppEvent>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if ui.button("Back").clicked() {
            events.push(AppEvent::CloseEnlarged);
        }
        ui.separator();
        match view.enlarged_poster.as_ref() {
            Some(PosterTexture {
                texture: Some(texture),
                path,
            }) => {
                ui.label(path.display().to_string());
                let image = egui::Image::new((texture.id(), texture.size_vec2()))
                    .sense(Sense::click());
                if ui.add(image).clicked() {
                    events.push(AppEvent::CloseEnlarged);
                }
            }
            _ => {
                ui.label("Poster unavailable");
            }
        }
    });
}

fn show_notice(ctx: &egui::Context, notices: &mut VecDeque<Notice>) {
    let Some(notice) = notices.front() else {
        return;
    };

    let color = match notice.level {
        NoticeLevel::Info => Color32::LIGHT_BLUE,
        NoticeLevel::Warning => Color32::YELLOW,
        NoticeLevel::Error => Color32::LIGHT_RED,
    };
    let mut dismissed = false;
    egui::Window::new(notice.title.as_str())
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(color, notice.message.as_str());
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    if dismissed {
        notices.pop_front();
    }
}

fn show_busy_overlay(ctx: &egui::Context, label: &str) {
    egui::Window::new("Please wait")
        .id(egui::Id::new("busy"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(label);
            });
        });
}

/// Largest size with `size`'s aspect ratio that fits in `bounds`, never upscaled.
fn fit(size: Vec2, bounds: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bounds.x / size.x).min(bounds.y / size.y).min(1.0);
    size * scale
}

pub fn launch_window(controller: AppController, decoder: Box<dyn PosterDecoder>) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([980.0, 680.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GoSpoil",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(GoSpoilApp::new(controller, decoder)))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
