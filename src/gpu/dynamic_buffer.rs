//! Dynamic GPU buffer management with automatic resizing.
//!
//! Instance counts change from frame to frame, so instance buffers grow
//! automatically when data exceeds capacity, using a 2x growth strategy to
//! minimize reallocations. Buffers never shrink (GPU buffers cannot be
//! resized in place).

use wgpu::util::DeviceExt;

/// A GPU buffer that can grow dynamically.
pub struct DynamicBuffer {
    buffer: wgpu::Buffer,
    capacity: usize, // Capacity in bytes
    len: usize,      // Current data length in bytes
    usage: wgpu::BufferUsages,
    label: String,
}

impl DynamicBuffer {
    /// Buffer with the given initial byte capacity.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        initial_capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = initial_capacity.max(64); // Minimum 64 bytes

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            capacity,
            len: 0,
            usage,
            label: label.to_owned(),
        }
    }

    /// Buffer initialized from existing data.
    pub fn new_with_data<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        let capacity = data_bytes.len().max(64);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: data_bytes,
            usage: usage | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            capacity,
            len: data_bytes.len(),
            usage,
            label: label.to_owned(),
        }
    }

    /// Write data to the buffer, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated (bind groups referencing
    /// it need recreation).
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        let needed = data_bytes.len();

        let reallocated = if needed > self.capacity {
            // 2x growth, minimum 1KB
            let new_capacity = (needed * 2).max(self.capacity + 1024);
            log::debug!(
                "growing buffer '{}': {} -> {} bytes",
                self.label,
                self.capacity,
                new_capacity
            );

            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: new_capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });

            self.capacity = new_capacity;
            true
        } else {
            false
        };

        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, data_bytes);
        }
        self.len = needed;

        reallocated
    }

    /// The underlying GPU buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Current data length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no data has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Typed wrapper for [`DynamicBuffer`] that tracks item count rather than
/// byte length.
pub struct TypedBuffer<T> {
    inner: DynamicBuffer,
    count: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Typed buffer with the specified initial capacity (in items).
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let initial_capacity = size_of::<T>() * capacity;
        Self {
            inner: DynamicBuffer::new(device, label, initial_capacity, usage),
            count: 0,
            _marker: std::marker::PhantomData,
        }
    }

    /// Write data to the buffer, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[T]) -> bool {
        self.count = data.len();
        self.inner.write(device, queue, data)
    }

    /// The underlying GPU buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        self.inner.buffer()
    }

    /// Number of items last written.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if no items have been written.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
