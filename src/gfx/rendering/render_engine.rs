//! WGPU-based rendering engine for the viewer
//!
//! One render pass per frame. Every draw item is flat colored; items whose
//! material is in wireframe mode go through a line-list pipeline over the
//! mesh's unique edges instead of its triangles.

use std::sync::Arc;

use crate::config::RenderSettings;
use crate::error::{Result, ViewerError};
use crate::gfx::{
    camera::OrthoCamera,
    geometry::GeometryData,
    resources::{
        global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO},
        material::ObjectUniform,
        object_bindings::ObjectBindings,
        texture_resource::TextureResource,
    },
    scene::Scene,
};

use super::mesh::{DrawMesh, GpuMesh};
use super::pipeline_manager::{PipelineConfig, PipelineManager};

pub const FILL_PIPELINE: &str = "Basic";
pub const WIREFRAME_PIPELINE: &str = "Wireframe";

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    object_bindings: ObjectBindings,
    meshes: Vec<GpuMesh>,
    clear_color: wgpu::Color,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `settings` - Clear color and present mode
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        settings: &RenderSettings,
    ) -> Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        // Material colors are authored as raw 0xRRGGBB, so prefer a non-sRGB target
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(ViewerError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: if settings.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);
        let object_bindings = ObjectBindings::new(&device);

        let device: Arc<wgpu::Device> = device.into();
        let queue: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device.clone());

        pipeline_manager.load_shader("basic", include_str!("basic.wgsl"));

        let base = PipelineConfig::default()
            .with_shader("basic")
            .with_color_format(format)
            .with_depth_format(TextureResource::DEPTH_FORMAT)
            // Open tubes show their inside
            .with_cull_mode(None)
            .with_bind_group_layouts(vec![
                global_bindings.bind_group_layout().clone(),
                object_bindings.bind_group_layout().clone(),
            ]);

        pipeline_manager.register_pipeline(FILL_PIPELINE, base.clone().with_label("FILL"));
        pipeline_manager.register_pipeline(
            WIREFRAME_PIPELINE,
            base.with_label("WIREFRAME")
                .with_primitive_topology(wgpu::PrimitiveTopology::LineList),
        );

        if let Err(errors) = pipeline_manager.create_all_pipelines() {
            for error in &errors {
                log::error!("{error}");
            }
        }

        Ok(RenderEngine {
            surface,
            device,
            queue,
            config,
            depth_texture,
            pipeline_manager,
            global_ubo,
            global_bindings,
            object_bindings,
            meshes: Vec::new(),
            clear_color: settings.clear_color,
        })
    }

    /// Uploads every scene geometry; [`MeshId`](crate::gfx::scene::MeshId)s index this list
    pub fn upload_geometries(&mut self, geometries: &[GeometryData]) {
        self.meshes = geometries
            .iter()
            .enumerate()
            .map(|(i, data)| GpuMesh::upload(&self.device, data, &format!("Mesh {i}")))
            .collect();
        log::info!("Uploaded {} meshes", self.meshes.len());
    }

    /// Draws `scene` as seen from `camera` and presents the frame
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame(&mut self, scene: &Scene, camera: &OrthoCamera) -> Result<()> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        update_global_ubo(&mut self.global_ubo, &self.queue, camera);

        let draws = scene.collect_draws();
        if let Some(missing) = draws.iter().find(|d| d.mesh.0 >= self.meshes.len()) {
            return Err(ViewerError::MissingMesh(missing.mesh.0));
        }

        let uniforms: Vec<ObjectUniform> = draws
            .iter()
            .map(|d| ObjectUniform::new(d.model, &d.material))
            .collect();
        self.object_bindings
            .upload(&self.device, &self.queue, &uniforms);

        let fill = self
            .pipeline_manager
            .pipeline(FILL_PIPELINE)
            .ok_or_else(|| ViewerError::MissingPipeline(FILL_PIPELINE.to_string()))?;
        let wireframe = self
            .pipeline_manager
            .pipeline(WIREFRAME_PIPELINE)
            .ok_or_else(|| ViewerError::MissingPipeline(WIREFRAME_PIPELINE.to_string()))?;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            let mut bound_wireframe = None;
            for (i, draw) in draws.iter().enumerate() {
                let as_wireframe = draw.material.wireframe;
                if bound_wireframe != Some(as_wireframe) {
                    render_pass.set_pipeline(if as_wireframe { wireframe } else { fill });
                    bound_wireframe = Some(as_wireframe);
                }
                render_pass.set_bind_group(
                    1,
                    self.object_bindings.bind_group(),
                    &[self.object_bindings.offset(i)],
                );
                render_pass.draw_mesh(&self.meshes[draw.mesh.0], as_wireframe);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }
}
