use super::helpers;
use wgpu;

/// Depth attachment matching the swapchain size.
///
/// Recreated whenever the canvas backing store changes size; the view is
/// pre-created for the render pass.
pub(crate) struct DepthTarget {
    _tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_depth_texture(device, width, height);
        Self { _tex: tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self._tex, self.view) = helpers::create_depth_texture(device, width, height);
    }
}
