/// 循环缓冲区
///
/// 容量向上取整为2的幂，用位掩码替代模运算。
/// 缓冲区满时扩容而不是覆盖，写入的元素不会丢失。
#[derive(Debug)]
pub struct RingBuffer<T> {
    buffer: Box<[Option<T>]>,
    capacity: usize,
    mask: usize,
    // 读取位置
    head: usize,
    // 写入位置
    tail: usize,
    size: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        // 确保容量是2的幂，且至少为1
        let capacity = capacity.max(1).next_power_of_two();
        let buffer: Vec<Option<T>> = (0..capacity).map(|_| None).collect();

        Self {
            buffer: buffer.into_boxed_slice(),
            capacity,
            mask: capacity - 1,
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    /// 写入一个元素，缓冲区满时容量翻倍，已有元素保持原顺序
    #[inline]
    pub fn push(&mut self, item: T) {
        if self.size == self.capacity {
            self.grow();
        }

        self.buffer[self.tail] = Some(item);
        self.tail = (self.tail + 1) & self.mask;
        self.size += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        let item = self.buffer[self.head].take();
        self.head = (self.head + 1) & self.mask;
        self.size -= 1;
        item
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    // 按读取顺序搬到两倍大小的新缓冲区
    fn grow(&mut self) {
        let capacity = self.capacity * 2;
        let mut buffer: Vec<Option<T>> = Vec::with_capacity(capacity);
        for offset in 0..self.size {
            buffer.push(self.buffer[(self.head + offset) & self.mask].take());
        }
        buffer.resize_with(capacity, || None);

        self.buffer = buffer.into_boxed_slice();
        self.capacity = capacity;
        self.mask = capacity - 1;
        self.head = 0;
        self.tail = self.size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_rounds_up_to_power_of_two() {
        let buffer: RingBuffer<u32> = RingBuffer::new(5);
        assert_eq!(buffer.capacity(), 8);

        let buffer: RingBuffer<u32> = RingBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
    }

    #[test]
    fn test_fifo_order() {
        let mut buffer = RingBuffer::new(4);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        assert_eq!(buffer.pop(), Some(1));
        assert_eq!(buffer.pop(), Some(2));
        assert_eq!(buffer.pop(), Some(3));
        assert_eq!(buffer.pop(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_full_buffer_grows_and_keeps_order() {
        let mut buffer = RingBuffer::new(2);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 2);

        // 满了以后扩容，不覆盖最旧的数据
        buffer.push("c");
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.pop(), Some("a"));
        assert_eq!(buffer.pop(), Some("b"));
        assert_eq!(buffer.pop(), Some("c"));
    }

    #[test]
    fn test_grow_after_wraparound() {
        let mut buffer = RingBuffer::new(4);
        for i in 0..4 {
            buffer.push(i);
        }
        assert_eq!(buffer.pop(), Some(0));
        assert_eq!(buffer.pop(), Some(1));

        // 写入位置已经回绕到开头
        for i in 4..8 {
            buffer.push(i);
        }
        assert_eq!(buffer.capacity(), 8);

        let drained: Vec<i32> = std::iter::from_fn(|| buffer.pop()).collect();
        assert_eq!(drained, vec![2, 3, 4, 5, 6, 7]);
    }
}
