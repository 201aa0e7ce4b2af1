//! Unit tests for the headless reference backend

use super::*;
use crate::graphics_device::{BufferHint, BufferUsage, IndexType, ShaderDataType, VertexLayout};

fn test_device() -> NullGraphicsDevice {
    NullGraphicsDevice::new()
}

fn test_shader_desc() -> ShaderProgramDesc {
    ShaderProgramDesc {
        vertex_src: "void main() {}".to_string(),
        fragment_src: "void main() {}".to_string(),
    }
}

// ============================================================================
// Buffers
// ============================================================================

#[test]
fn test_create_buffer_records_op() {
    let mut device = test_device();
    let buffer = device
        .create_buffer(BufferDesc {
            size: 64,
            usage: BufferUsage::Vertex,
            hint: BufferHint::Static,
        })
        .unwrap();

    assert_eq!(buffer.size(), 64);
    assert_eq!(device.ops(), &["create_buffer:64".to_string()]);
}

#[test]
fn test_create_zero_sized_buffer_fails() {
    let mut device = test_device();
    let result = device.create_buffer(BufferDesc {
        size: 0,
        usage: BufferUsage::Index,
        hint: BufferHint::Static,
    });
    assert!(result.is_err());
}

#[test]
fn test_buffer_update_writes_contents() {
    let buffer = NullBuffer::new(8);
    buffer.update(2, &[1, 2, 3]).unwrap();
    assert_eq!(buffer.contents(), vec![0, 0, 1, 2, 3, 0, 0, 0]);
}

#[test]
fn test_buffer_update_out_of_range_fails() {
    let buffer = NullBuffer::new(4);
    assert!(buffer.update(2, &[0, 0, 0]).is_err());
    assert!(buffer.update(0, &[0, 0, 0, 0]).is_ok());
}

// ============================================================================
// Vertex arrays
// ============================================================================

#[test]
fn test_create_vertex_array_indexed() {
    let mut device = test_device();
    let layout = VertexLayout::new(&[ShaderDataType::Float3]);
    let vertex_buffer = device
        .create_buffer(BufferDesc {
            size: 3 * 12,
            usage: BufferUsage::Vertex,
            hint: BufferHint::Static,
        })
        .unwrap();
    let index_buffer = device
        .create_buffer(BufferDesc {
            size: 3 * 4,
            usage: BufferUsage::Index,
            hint: BufferHint::Static,
        })
        .unwrap();

    let vertex_array = device
        .create_vertex_array(VertexArrayDesc {
            vertex_buffer,
            layout,
            index_buffer: Some(index_buffer),
            index_type: IndexType::U32,
            vertex_count: 3,
            index_count: 3,
        })
        .unwrap();

    assert_eq!(vertex_array.vertex_count(), 3);
    assert_eq!(vertex_array.index_count(), 3);
    assert!(vertex_array.is_indexed());
}

#[test]
fn test_create_vertex_array_rejects_zero_vertices() {
    let mut device = test_device();
    let layout = VertexLayout::new(&[ShaderDataType::Float3]);
    let vertex_buffer = device
        .create_buffer(BufferDesc {
            size: 12,
            usage: BufferUsage::Vertex,
            hint: BufferHint::Static,
        })
        .unwrap();

    let result = device.create_vertex_array(VertexArrayDesc {
        vertex_buffer,
        layout,
        index_buffer: None,
        index_type: IndexType::U32,
        vertex_count: 0,
        index_count: 0,
    });
    assert!(result.is_err());
}

#[test]
fn test_create_vertex_array_rejects_undersized_buffer() {
    let mut device = test_device();
    let layout = VertexLayout::new(&[ShaderDataType::Float3]);
    let vertex_buffer = device
        .create_buffer(BufferDesc {
            size: 12,
            usage: BufferUsage::Vertex,
            hint: BufferHint::Static,
        })
        .unwrap();

    // 2 vertices * 12-byte stride = 24 bytes > 12-byte buffer
    let result = device.create_vertex_array(VertexArrayDesc {
        vertex_buffer,
        layout,
        index_buffer: None,
        index_type: IndexType::U32,
        vertex_count: 2,
        index_count: 0,
    });
    assert!(result.is_err());
}

#[test]
fn test_create_vertex_array_rejects_indices_without_buffer() {
    let mut device = test_device();
    let layout = VertexLayout::new(&[ShaderDataType::Float3]);
    let vertex_buffer = device
        .create_buffer(BufferDesc {
            size: 36,
            usage: BufferUsage::Vertex,
            hint: BufferHint::Static,
        })
        .unwrap();

    let result = device.create_vertex_array(VertexArrayDesc {
        vertex_buffer,
        layout,
        index_buffer: None,
        index_type: IndexType::U32,
        vertex_count: 3,
        index_count: 3,
    });
    assert!(result.is_err());
}

// ============================================================================
// Shader programs
// ============================================================================

#[test]
fn test_create_shader_program_success() {
    let mut device = test_device();
    let result = device.create_shader_program(test_shader_desc());
    assert!(result.is_ok());
    assert!(device
        .ops()
        .contains(&"create_shader_program".to_string()));
}

#[test]
fn test_empty_shader_source_fails_compilation() {
    let mut device = test_device();
    let result = device.create_shader_program(ShaderProgramDesc {
        vertex_src: "   ".to_string(),
        fragment_src: "void main() {}".to_string(),
    });

    match result {
        Err(Error::ShaderCompilationFailed(_)) => {}
        other => panic!("Expected ShaderCompilationFailed, got {:?}", other.err()),
    }
}

#[test]
fn test_shader_program_stores_uniforms_by_name() {
    let mut device = test_device();
    let shader = device.create_shader_program(test_shader_desc()).unwrap();

    let matrix = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
    shader.set_matrix4("model_matrix", &matrix).unwrap();

    assert_eq!(device.uniform_uploads(), vec!["model_matrix".to_string()]);
}

// ============================================================================
// Textures
// ============================================================================

#[test]
fn test_create_texture_success() {
    let mut device = test_device();
    let texture = device
        .create_texture(TextureDesc {
            width: 2,
            height: 2,
            data: vec![255; 16],
        })
        .unwrap();

    assert_eq!(texture.info().width, 2);
    assert_eq!(texture.info().height, 2);
    assert!(device.ops().contains(&"create_texture:2x2".to_string()));
}

#[test]
fn test_create_texture_rejects_mismatched_data() {
    let mut device = test_device();
    let result = device.create_texture(TextureDesc {
        width: 2,
        height: 2,
        data: vec![255; 15],
    });
    assert!(result.is_err());
}

#[test]
fn test_create_texture_rejects_degenerate_dimensions() {
    let mut device = test_device();
    let result = device.create_texture(TextureDesc {
        width: 0,
        height: 2,
        data: vec![],
    });
    assert!(result.is_err());
}

// ============================================================================
// Frame surface
// ============================================================================

#[test]
fn test_frame_operations_are_recorded_in_order() {
    let mut device = test_device();
    let layout = VertexLayout::new(&[ShaderDataType::Float3]);
    let vertex_buffer = device
        .create_buffer(BufferDesc {
            size: 36,
            usage: BufferUsage::Vertex,
            hint: BufferHint::Static,
        })
        .unwrap();
    let vertex_array = device
        .create_vertex_array(VertexArrayDesc {
            vertex_buffer,
            layout,
            index_buffer: None,
            index_type: IndexType::U32,
            vertex_count: 3,
            index_count: 0,
        })
        .unwrap();
    let shader = device.create_shader_program(test_shader_desc()).unwrap();

    device.set_viewport(800, 600, 0, 0);
    device.clear();
    device.draw(vertex_array.as_ref(), shader.as_ref()).unwrap();
    device.present().unwrap();

    let ops = device.ops();
    let tail = &ops[ops.len() - 4..];
    assert_eq!(
        tail,
        &[
            "set_viewport:800x600".to_string(),
            "clear".to_string(),
            "draw:3".to_string(),
            "present".to_string(),
        ]
    );
}

#[test]
fn test_clear_color_and_viewport_state() {
    let mut device = test_device();

    device.set_clear_color([0.33, 0.33, 0.33, 0.0]);
    assert_eq!(device.clear_color(), [0.33, 0.33, 0.33, 0.0]);

    device.set_viewport(1024, 768, 10, 20);
    assert_eq!(device.viewport(), (1024, 768, 10, 20));
}

#[test]
fn test_backend_info_strings() {
    let device = test_device();
    let info = device.backend_info();
    assert_eq!(info.renderer, "Null device");
    assert!(!info.vendor.is_empty());
    assert!(!info.version.is_empty());
}
