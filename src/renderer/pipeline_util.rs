//! Shared wgpu state helpers used by both pipelines.

use crate::gpu::texture::DEPTH_FORMAT;

/// Single swapchain color target with straight alpha blending.
///
/// Color blends SrcAlpha / OneMinusSrcAlpha; alpha replaces (One / Zero).
#[must_use]
pub fn surface_fragment_targets(
    format: wgpu::TextureFormat,
) -> [Option<wgpu::ColorTargetState>; 1] {
    [Some(wgpu::ColorTargetState {
        format,
        blend: Some(wgpu::BlendState {
            color: wgpu::BlendComponent {
                operation: wgpu::BlendOperation::Add,
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            },
            alpha: wgpu::BlendComponent {
                operation: wgpu::BlendOperation::Add,
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::Zero,
            },
        }),
        write_mask: wgpu::ColorWrites::ALL,
    })]
}

/// Depth-stencil state: Less comparison, write toggled per pass (the solid
/// pass writes, the outline pass only tests).
#[must_use]
pub fn depth_stencil_state(depth_write_enabled: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}
