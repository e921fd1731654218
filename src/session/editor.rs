use image::DynamicImage;

use crate::foundation::color::TextColor;
use crate::foundation::core::{BrushSize, DisplayRect, Point};
use crate::foundation::error::{MaskError, MaskResult};
use crate::history::timeline::Timeline;
use crate::input::mapper::map_to_backing;
use crate::input::recorder::StrokeRecorder;
use crate::input::shortcuts::{FocusTarget, HistoryCommand, KeyChord, resolve};
use crate::instruction::fonts::DEFAULT_TEXT_FONT;
use crate::instruction::state::{EditSessionState, EditType, FontSize, TextAlignment};
use crate::instruction::synth::{EditPayload, synthesize};
use crate::render::compositor::Compositor;
use crate::render::source::decode_source;
use crate::session::host::{EditorHost, GenerationService};
use crate::session::opts::EditorOpts;

/// One editing session over a single source image.
///
/// Owns the stroke history, the gesture recorder, the compositor's buffer and the edit settings.
/// Dropping the session discards all of it.
///
/// Mutating controls return `false` (and change nothing) while [`EditorSession::is_loading`] is
/// set. Operations that redraw return `MaskResult<bool>`.
#[derive(Debug)]
pub struct EditorSession {
    opts: EditorOpts,
    compositor: Compositor,
    timeline: Timeline,
    recorder: StrokeRecorder,
    state: EditSessionState,
    brush: BrushSize,
    loading: bool,
}

impl EditorSession {
    /// Open the editor on an already decoded image.
    #[tracing::instrument(skip(source), fields(src_w = source.width(), src_h = source.height()))]
    pub fn open(source: &DynamicImage, opts: EditorOpts) -> MaskResult<Self> {
        let compositor = Compositor::new(source, opts.canvas)?;
        Ok(Self {
            brush: opts.default_brush,
            opts,
            compositor,
            timeline: Timeline::new(),
            recorder: StrokeRecorder::new(),
            state: EditSessionState::default(),
            loading: false,
        })
    }

    /// Decode `bytes` and open the editor on the result.
    pub fn open_bytes(bytes: &[u8], opts: EditorOpts) -> MaskResult<Self> {
        let source = decode_source(bytes)?;
        Self::open(&source, opts)
    }

    /// Configuration the session was opened with.
    pub fn opts(&self) -> &EditorOpts {
        &self.opts
    }

    /// Stroke history.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Read access to the drawing surface.
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Current edit settings.
    pub fn state(&self) -> &EditSessionState {
        &self.state
    }

    /// Brush diameter the next gesture will use.
    pub fn brush(&self) -> BrushSize {
        self.brush
    }

    /// `true` between pointer-down and pointer-up.
    pub fn is_drawing(&self) -> bool {
        self.recorder.is_recording()
    }

    /// `true` while a previous submission is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Host-driven loading flag; while set, every mutating control is a no-op and apply is refused.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // --- pointer input ---------------------------------------------------------------------

    /// Start a gesture at client position `client` on a surface currently shown at `rect`.
    pub fn pointer_down(&mut self, client: Point, rect: DisplayRect) -> bool {
        if self.loading {
            return false;
        }
        let at = map_to_backing(client, rect, self.opts.canvas);
        self.recorder.begin(at, self.brush);
        true
    }

    /// Continue the gesture and draw the new piece immediately.
    pub fn pointer_move(&mut self, client: Point, rect: DisplayRect) -> MaskResult<bool> {
        if self.loading {
            return Ok(false);
        }
        let to = map_to_backing(client, rect, self.opts.canvas);
        let Some(segment) = self.recorder.extend(to) else {
            return Ok(false);
        };
        self.compositor.draw_segment(&segment)?;
        Ok(true)
    }

    /// End the gesture; a captured stroke is committed and the surface re-rendered.
    ///
    /// While loading the gesture is discarded and its live pieces are wiped from the surface.
    pub fn pointer_up(&mut self) -> MaskResult<bool> {
        let Some(stroke) = self.recorder.finish() else {
            return Ok(false);
        };
        if self.loading {
            tracing::debug!(points = stroke.len(), "gesture discarded while loading");
            self.redraw()?;
            return Ok(false);
        }
        self.timeline.append(stroke);
        self.redraw()?;
        Ok(true)
    }

    /// The pointer left the surface; behaves like pointer-up.
    pub fn pointer_leave(&mut self) -> MaskResult<bool> {
        self.pointer_up()
    }

    // --- history ---------------------------------------------------------------------------

    /// Step back one stroke.
    pub fn undo(&mut self) -> MaskResult<bool> {
        if self.loading || !self.timeline.undo() {
            return Ok(false);
        }
        self.redraw()?;
        Ok(true)
    }

    /// Step forward one stroke.
    pub fn redo(&mut self) -> MaskResult<bool> {
        if self.loading || !self.timeline.redo() {
            return Ok(false);
        }
        self.redraw()?;
        Ok(true)
    }

    /// Remove every stroke.
    pub fn clear(&mut self) -> MaskResult<bool> {
        if !self.can_clear() {
            return Ok(false);
        }
        self.timeline.clear();
        self.redraw()?;
        Ok(true)
    }

    /// Route a key chord; undo/redo chords act unless focus is in a text field.
    pub fn key_down(&mut self, chord: &KeyChord, focus: FocusTarget) -> MaskResult<bool> {
        match resolve(chord, focus) {
            Some(HistoryCommand::Undo) => self.undo(),
            Some(HistoryCommand::Redo) => self.redo(),
            None => Ok(false),
        }
    }

    fn redraw(&mut self) -> MaskResult<()> {
        self.compositor
            .redraw_upto(&self.timeline, self.timeline.cursor())
    }

    // --- controls --------------------------------------------------------------------------

    /// Set the brush for subsequent gestures; an in-progress gesture keeps its own size.
    pub fn set_brush_size(&mut self, px: f64) -> bool {
        if self.loading {
            return false;
        }
        self.brush = BrushSize::new(px);
        true
    }

    /// Switch between erase and replace. The mask is kept; the brush resets, and erase drops
    /// any font selection.
    pub fn set_edit_type(&mut self, edit_type: EditType) -> bool {
        if self.loading {
            return false;
        }
        self.state.edit_type = edit_type;
        if edit_type == EditType::Erase {
            self.state.selected_font = None;
        }
        self.brush = self.opts.default_brush;
        true
    }

    /// Replace the free-text prompt.
    pub fn set_custom_prompt(&mut self, prompt: impl Into<String>) -> bool {
        if self.loading {
            return false;
        }
        self.state.custom_prompt = prompt.into();
        true
    }

    /// Pick a font family; implies replace mode.
    pub fn select_font(&mut self, family: impl Into<String>) -> bool {
        if self.loading {
            return false;
        }
        self.state.selected_font = Some(family.into());
        self.state.edit_type = EditType::Replace;
        true
    }

    /// Drop the font selection.
    pub fn clear_font(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.state.selected_font = None;
        true
    }

    /// Text colour for the styling directive.
    pub fn set_font_color(&mut self, color: TextColor) -> bool {
        if self.loading {
            return false;
        }
        self.state.font_color = color;
        true
    }

    /// Text size tier for the styling directive.
    pub fn set_font_size(&mut self, size: FontSize) -> bool {
        if self.loading {
            return false;
        }
        self.state.font_size = size;
        true
    }

    /// Text alignment for the styling directive.
    pub fn set_text_alignment(&mut self, alignment: TextAlignment) -> bool {
        if self.loading {
            return false;
        }
        self.state.text_alignment = alignment;
        true
    }

    /// Preset for adding text: replace mode, default font and styling, empty prompt.
    pub fn add_text_mode(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.state = EditSessionState {
            edit_type: EditType::Replace,
            custom_prompt: String::new(),
            selected_font: Some(DEFAULT_TEXT_FONT.to_owned()),
            font_color: TextColor::WHITE,
            font_size: FontSize::Medium,
            text_alignment: TextAlignment::Center,
        };
        self.brush = self.opts.default_brush;
        true
    }

    /// Overwrite all edit settings at once.
    pub fn set_state(&mut self, state: EditSessionState) -> bool {
        if self.loading {
            return false;
        }
        self.state = state;
        true
    }

    // --- readiness -------------------------------------------------------------------------

    /// `true` while at least one stroke is active.
    pub fn has_mask(&self) -> bool {
        self.timeline.has_mask()
    }

    /// Undo control enabled.
    pub fn can_undo(&self) -> bool {
        !self.loading && self.timeline.can_undo()
    }

    /// Redo control enabled.
    pub fn can_redo(&self) -> bool {
        !self.loading && self.timeline.can_redo()
    }

    /// Clear control enabled.
    pub fn can_clear(&self) -> bool {
        !self.loading && self.timeline.has_mask()
    }

    /// Apply control enabled: not loading, something highlighted, and enough description.
    pub fn can_apply(&self) -> bool {
        !self.loading && self.timeline.has_mask() && self.state.is_describable()
    }

    // --- output ----------------------------------------------------------------------------

    /// Build the flattened image + instruction from the current state.
    pub fn payload(&self) -> MaskResult<EditPayload> {
        if self.loading {
            return Err(MaskError::validation(
                "a previous submission is still outstanding",
            ));
        }
        synthesize(
            &self.state,
            self.timeline.has_mask(),
            &self.compositor,
            self.opts.jpeg_quality,
        )
    }

    /// Hand the payload to the hosting UI.
    pub fn confirm(&self, host: &mut dyn EditorHost) -> MaskResult<()> {
        let payload = self.payload()?;
        host.on_apply(&payload.image_base64(), &payload.instruction);
        Ok(())
    }

    /// Discard the session and tell the host.
    pub fn cancel(self, host: &mut dyn EditorHost) {
        tracing::debug!(strokes = self.timeline.len(), "editor cancelled");
        host.on_cancel();
    }

    /// Send the payload to the generation service and return the new image URL.
    ///
    /// The session is marked loading for the duration of the call. Service failures are passed
    /// through as [`MaskError::Service`] with the upstream message unchanged.
    #[tracing::instrument(skip(self, service))]
    pub fn submit(&mut self, service: &mut dyn GenerationService) -> MaskResult<String> {
        let payload = self.payload()?;
        self.loading = true;
        let result = service.apply(&payload.flattened_image, &payload.instruction);
        self.loading = false;
        result.map_err(|e| MaskError::service(e.message))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;
