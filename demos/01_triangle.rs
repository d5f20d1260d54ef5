#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(unsafe_code)]

use std::cell::RefCell;
use std::sync::Arc;

use eframe::{egui, egui_glow, glow};

use del_shader::{ShaderConfig, ShaderProgram};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([550.0, 600.0]),
        multisampling: 4,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };
    eframe::run_native(
        "Shader program loaded from files",
        options,
        Box::new(|_cc| Ok(Box::new(MyApp { angle: 0.0 }))),
    )
}

struct Triangle {
    program: ShaderProgram<Arc<glow::Context>>,
    vertex_array: Option<glow::VertexArray>,
    vertex_buffer: Option<glow::Buffer>,
}

impl Triangle {
    fn new(gl: &Arc<glow::Context>) -> Self {
        use glow::HasContext as _;

        let mut config = ShaderConfig::from_env().with_platform_version_header();
        config
            .search_paths
            .push(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders").into());
        let mut program = ShaderProgram::from_config(gl.clone(), &config);
        if let Err(err) = program.load("triangle.vert", "triangle.frag") {
            log::error!("{err}");
            return Self {
                program,
                vertex_array: None,
                vertex_buffer: None,
            };
        }

        let vtx2xyrgb: [f32; 15] = [
            -0.5, -0.5, 1.0, 0.0, 0.0, 0.0, 0.5, 0.0, 1.0, 0.0, 0.5, -0.5, 0.0, 0.0, 1.0,
        ];
        let stride = 5 * std::mem::size_of::<f32>() as i32;
        let loc_xy = program.attribute_location("xyIn");
        let loc_rgb = program.attribute_location("rgbIn");
        unsafe {
            let vbo = gl.create_buffer().ok();
            gl.bind_buffer(glow::ARRAY_BUFFER, vbo);
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&vtx2xyrgb),
                glow::STATIC_DRAW,
            );
            let vao = gl.create_vertex_array().ok();
            gl.bind_vertex_array(vao);
            if let Some(loc) = loc_xy {
                gl.vertex_attrib_pointer_f32(loc, 2, glow::FLOAT, false, stride, 0);
                gl.enable_vertex_attrib_array(loc);
            }
            if let Some(loc) = loc_rgb {
                let offset = 2 * std::mem::size_of::<f32>() as i32;
                gl.vertex_attrib_pointer_f32(loc, 3, glow::FLOAT, false, stride, offset);
                gl.enable_vertex_attrib_array(loc);
            }
            Self {
                program,
                vertex_array: vao,
                vertex_buffer: vbo,
            }
        }
    }

    fn paint(&self, gl: &glow::Context, angle: f32) {
        use glow::HasContext as _;
        if !del_shader::use_shader(self.program.gl(), Some(&self.program)) {
            return;
        }
        let loc_angle = self.program.uniform_location("angle");
        let loc_tint = self.program.uniform_location("tint");
        self.program.set_uniform(loc_angle.as_ref(), angle);
        self.program.set_uniform(loc_tint.as_ref(), [1.0f32, 1.0, 1.0, 1.0]);
        unsafe {
            gl.bind_vertex_array(self.vertex_array);
            gl.draw_arrays(glow::TRIANGLES, 0, 3);
        }
        del_shader::use_shader(self.program.gl(), None);
    }

    fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext as _;
        unsafe {
            if let Some(vao) = self.vertex_array {
                gl.delete_vertex_array(vao);
            }
            if let Some(vbo) = self.vertex_buffer {
                gl.delete_buffer(vbo);
            }
        }
    }
}

thread_local! {
    /// [`ShaderProgram`] is not `Send`, so it lives on the painting thread
    /// instead of inside the [`egui::PaintCallback`].
    static TRIANGLE: RefCell<Option<Triangle>> = const { RefCell::new(None) };
}

fn with_triangle<R>(gl: &Arc<glow::Context>, f: impl FnOnce(&Triangle) -> R) -> R {
    TRIANGLE.with(|triangle| {
        let mut triangle = triangle.borrow_mut();
        let triangle = triangle.get_or_insert_with(|| Triangle::new(gl));
        f(triangle)
    })
}

struct MyApp {
    angle: f32,
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label("The shaders are read from ");
                ui.code("demos/shaders");
                ui.label(" and compiled at startup.");
            });
            egui::Frame::canvas(ui.style()).show(ui, |ui| {
                self.custom_painting(ui);
            });
            ui.label("Drag to rotate!");
        });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        // drop the program while the context is still alive
        let triangle = TRIANGLE.with(|triangle| triangle.borrow_mut().take());
        if let (Some(triangle), Some(gl)) = (triangle, gl) {
            triangle.destroy(gl);
        }
    }
}

impl MyApp {
    fn custom_painting(&mut self, ui: &mut egui::Ui) {
        let (rect, response) =
            ui.allocate_exact_size(egui::Vec2::splat(500.0), egui::Sense::drag());
        self.angle += response.drag_motion().x * 0.01;
        let angle = self.angle;
        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |_info, painter| {
                with_triangle(painter.gl(), |triangle| triangle.paint(painter.gl(), angle));
            })),
        };
        ui.painter().add(callback);
    }
}
