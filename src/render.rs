use crate::camera::OrthoCamera;
use crate::constants::{AMBIENT_LIGHT, CLEAR_RGB, DIFFUSE_LIGHT, LIGHT_DIR, MAX_INSTANCES};
use hero_core::ObjectPose;
use web_sys as web;

mod helpers;
mod mesh;
mod shapes;
mod targets;

use mesh::InstanceRaw;
use shapes::{create_shape_resources, SceneUniforms, ShapeResources};
use targets::DepthTarget;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    shapes: ShapeResources,
    depth: DepthTarget,
    instances: Vec<InstanceRaw>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shapes = create_shape_resources(&device, format);
        let depth = DepthTarget::new(&device, width, height);
        log::info!("[gpu] surface {}x{} format {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            shapes,
            depth,
            instances: Vec::with_capacity(MAX_INSTANCES),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reapply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, self.width, self.height);
    }

    pub fn render(
        &mut self,
        camera: &OrthoCamera,
        poses: &[ObjectPose],
    ) -> Result<(), wgpu::SurfaceError> {
        if poses.len() > MAX_INSTANCES {
            log::warn!(
                "[gpu] {} objects exceed instance capacity {}; extra objects not drawn",
                poses.len(),
                MAX_INSTANCES
            );
        }
        self.instances.clear();
        self.instances
            .extend(poses.iter().take(MAX_INSTANCES).map(InstanceRaw::from_pose));

        let [lx, ly, lz] = LIGHT_DIR;
        let uniforms = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            light_dir: [lx, ly, lz, 0.0],
            light: [AMBIENT_LIGHT, DIFFUSE_LIGHT, 0.0, 0.0],
        };
        self.queue.write_buffer(
            &self.shapes.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        if !self.instances.is_empty() {
            self.queue.write_buffer(
                &self.shapes.instance_buffer,
                0,
                bytemuck::cast_slice(&self.instances),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if !self.instances.is_empty() {
                rpass.set_pipeline(&self.shapes.pipeline);
                rpass.set_bind_group(0, &self.shapes.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.shapes.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, self.shapes.instance_buffer.slice(..));
                rpass.draw(0..self.shapes.vertex_count, 0..self.instances.len() as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
