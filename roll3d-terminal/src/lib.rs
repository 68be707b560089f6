/// Terminal driver that plays the scripted animation once
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::{info, warn};
use roll3d_core::{Frame, Scene, SceneFrame, Timeline};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::{LineRenderer, Stroke};

/// Main application struct for the terminal animation
pub struct AnimationApp {
    scene: Scene,
    timeline: Timeline,
    renderer: LineRenderer,
    frame_interval: Duration,
    running: bool,
}

impl AnimationApp {
    pub fn new(scene: Scene, timeline: Timeline, fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        // bottom row is the status line
        let rows = height.saturating_sub(1) as usize;
        Ok(Self::with_size(scene, timeline, fps, width as usize, rows))
    }

    pub fn with_size(
        scene: Scene,
        timeline: Timeline,
        fps: u32,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            scene,
            timeline,
            renderer: LineRenderer::new(width, height),
            frame_interval: Duration::from_secs(1) / fps.max(1),
            running: true,
        }
    }

    pub fn renderer(&self) -> &LineRenderer {
        &self.renderer
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        info!(
            "playing {} frames at {:?} per frame",
            self.timeline.config().frame_count,
            self.frame_interval
        );
        let frames: Vec<Frame> = self.timeline.frames().collect();
        let mut last = None;

        for frame in frames {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }
            if !self.running {
                info!("stopped at frame {}", frame);
                return Ok(());
            }

            let output = self.render_frame(frame);
            self.present(&output, false)?;
            last = Some(output);

            // Frame pacing; an overrun frame just starts the next one late
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_interval {
                std::thread::sleep(self.frame_interval - elapsed);
            }
        }

        // Hold the final frame until the viewer quits
        if let Some(output) = last {
            self.present(&output, true)?;
            while self.running {
                self.handle_input()?;
            }
        }
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                self.running = false;
            }
        }
        Ok(())
    }

    /// Evaluate the scene at `frame` and draw it into the character buffer
    pub fn render_frame(&mut self, frame: Frame) -> SceneFrame {
        let output = self.scene.frame(&self.timeline, frame);

        self.renderer.clear();
        for (role, _, projected) in &output.actors {
            if projected.is_degenerate() {
                warn!(
                    "frame {}: {} vertices of {:?} skipped",
                    frame,
                    projected.skipped.len(),
                    role
                );
            }
            let stroke = Stroke::for_role(*role);
            for polyline in &projected.polylines {
                self.renderer.draw_polyline(polyline, stroke);
            }
        }
        output
    }

    fn present(&self, output: &SceneFrame, finished: bool) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        queue!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print(status_line(output, self.timeline.config().frame_count, finished)),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Text shown under the animation
pub fn status_line(output: &SceneFrame, frame_count: u32, finished: bool) -> String {
    let phases: Vec<String> = output
        .actors
        .iter()
        .map(|(role, phase, _)| format!("{:?}: {}", role, phase))
        .collect();
    let hint = if finished { "done, Q=Quit" } else { "Q=Quit" };
    format!(
        "roll3d | frame {}/{} | {} | {}",
        output.frame + 1,
        frame_count,
        phases.join(", "),
        hint
    )
}
