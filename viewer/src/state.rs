use chrono::Local;
use fractals::env;
use fractals::graphics::color::PaletteHandler;
use fractals::models::fractal::fractal_descriptor::FractalDescriptor;
use fractals::models::resolution::Resolution;
use fractals::models::task::RenderTask;
use log::info;
use renderer::result::RenderResult;
use renderer::{png, Rendering};

/// Iteration budget step for escape-time kinds when detail keys are
/// pressed.
const ITERATION_STEP: u32 = 32;

/// Everything the window needs between frames: the catalogue of kinds,
/// the cursor into it, and the latest colored frame.
pub struct ViewerState {
    kinds: Vec<FractalDescriptor>,
    index: usize,
    max_iteration: u32,
    resolution: Resolution,
    palette: PaletteHandler,
    rendering: Option<Rendering>,
    colors: Vec<(u8, u8, u8)>,
}

impl ViewerState {
    /// Starts the catalogue on the task's fractal, keeping its budget.
    pub fn new(task: &RenderTask) -> Self {
        let mut kinds = FractalDescriptor::all_default();
        let index = kinds
            .iter()
            .position(|kind| kind.slug() == task.fractal.slug())
            .unwrap_or(0);
        kinds[index] = task.fractal;

        Self {
            kinds,
            index,
            max_iteration: task.max_iteration,
            resolution: task.resolution,
            palette: PaletteHandler::default(),
            rendering: None,
            colors: Vec::new(),
        }
    }

    pub fn current(&self) -> FractalDescriptor {
        self.kinds[self.index]
    }

    pub fn title(&self) -> String {
        format!("Fractal Shapes - {}", self.current().name())
    }

    fn task(&self) -> RenderTask {
        RenderTask::new(
            self.current(),
            self.max_iteration,
            self.resolution,
            self.current().default_range(),
        )
    }

    /// Renders the current kind synchronously and recolors the frame.
    pub fn rerender(&mut self) -> RenderResult<()> {
        let rendering = renderer::render(&self.task())?;
        self.rendering = Some(rendering);
        self.recolor();
        Ok(())
    }

    fn recolor(&mut self) {
        if let Some(rendering) = &self.rendering {
            self.colors = rendering
                .intensities
                .iter()
                .map(|intensity| {
                    self.palette
                        .calculate_color(intensity.count.clamp(0.0, 1.0) as f64)
                })
                .collect();
        }
    }

    pub fn next_kind(&mut self) -> RenderResult<()> {
        self.index = (self.index + 1) % self.kinds.len();
        self.max_iteration = self.current().default_max_iterations();
        self.rerender()
    }

    pub fn previous_kind(&mut self) -> RenderResult<()> {
        self.index = (self.index + self.kinds.len() - 1) % self.kinds.len();
        self.max_iteration = self.current().default_max_iterations();
        self.rerender()
    }

    /// Raises the recursion order where the kind has one, otherwise the
    /// iteration budget.
    pub fn more_detail(&mut self) -> RenderResult<()> {
        if !self.kinds[self.index].increase_detail() {
            self.max_iteration = self.max_iteration.saturating_add(ITERATION_STEP);
        }
        self.rerender()
    }

    pub fn less_detail(&mut self) -> RenderResult<()> {
        if !self.kinds[self.index].decrease_detail() {
            self.max_iteration = self.max_iteration.saturating_sub(ITERATION_STEP).max(1);
        }
        self.rerender()
    }

    /// Keeps the frame, swaps the coloring.
    pub fn cycle_palette(&mut self) {
        self.palette.cycle_palette();
        self.recolor();
    }

    /// Writes the frame on screen to a timestamped file under the
    /// configured output directory.
    pub fn save_snapshot(&self) -> RenderResult<()> {
        if let Some(rendering) = &self.rendering {
            let stamp = Local::now().format("%Y%m%d_%H%M%S");
            let path = env::output_dir().join(format!("{}_{stamp}.png", self.current().slug()));
            png::save_png(rendering, &self.palette, &path)?;
            info!("snapshot saved to {}", path.display());
        }
        Ok(())
    }

    /// Copies the colored frame into an RGBA pixel buffer.
    pub fn draw(&self, frame: &mut [u8]) {
        for (i, pixel) in frame.chunks_exact_mut(4).enumerate() {
            if self.colors.is_empty() {
                pixel.copy_from_slice(&[0x0, 0x0, 0x0, 0xff]);
            } else {
                let (red, green, blue) = self.colors[i % self.colors.len()];
                pixel.copy_from_slice(&[red, green, blue, 0xff]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractals::models::fractal::julia::Julia;
    use fractals::models::fractal::mandelbrot::Mandelbrot;

    fn small_state(fractal: FractalDescriptor) -> ViewerState {
        let mut task = RenderTask::with_defaults(fractal, Resolution::new(16, 16));
        task.max_iteration = 16;
        ViewerState::new(&task)
    }

    #[test]
    fn catalogue_starts_on_the_requested_kind() {
        let state = small_state(FractalDescriptor::Julia(Julia::default()));
        assert_eq!(state.current().slug(), "julia");
    }

    #[test]
    fn kind_cycling_wraps_both_ways() {
        let mut state = small_state(FractalDescriptor::Mandelbrot(Mandelbrot::new()));
        let first = state.current().slug();
        state.previous_kind().unwrap();
        assert_ne!(state.current().slug(), first);
        state.next_kind().unwrap();
        assert_eq!(state.current().slug(), first);
    }

    #[test]
    fn detail_keys_move_the_iteration_budget_for_escape_time() {
        let mut state = small_state(FractalDescriptor::Mandelbrot(Mandelbrot::new()));
        state.more_detail().unwrap();
        assert_eq!(state.max_iteration, 16 + ITERATION_STEP);
        state.less_detail().unwrap();
        assert_eq!(state.max_iteration, 16);
    }

    #[test]
    fn draw_fills_the_whole_rgba_buffer() {
        let mut state = small_state(FractalDescriptor::Mandelbrot(Mandelbrot::new()));
        state.rerender().unwrap();
        let mut frame = vec![0u8; 16 * 16 * 4];
        state.draw(&mut frame);
        for pixel in frame.chunks_exact(4) {
            assert_eq!(pixel[3], 0xff);
        }
    }
}
