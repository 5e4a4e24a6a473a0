use super::helpers;
use wgpu;

/// Depth buffer sized to the surface. Recreated whenever the canvas backing
/// size changes.
pub(crate) struct DepthTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_texture(
            device,
            "depth_tex",
            width,
            height,
            helpers::DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self { tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.tex.destroy();
        *self = Self::new(device, width, height);
    }
}
