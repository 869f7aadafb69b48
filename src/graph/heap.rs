use crate::graph::weighted::Ray;

/// Binary max-heap of rays laid out from slot 1: the children of slot `i`
/// live at `2i` and `2i + 1`, its parent at `i / 2`.
#[derive(Debug, Clone)]
pub struct RayHeap {
    items: Vec<Ray>,
}

impl Default for RayHeap {
    fn default() -> Self {
        RayHeap::with_capacity(0)
    }
}

impl RayHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity + 1);
        // slot 0 is padding so that index arithmetic stays 1-based
        items.push(Ray::new(0, 0, 0));
        RayHeap { items }
    }

    pub fn len(&self) -> usize {
        self.items.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn peek_max(&self) -> Option<&Ray> {
        self.items.get(1)
    }

    pub fn push(&mut self, ray: Ray) {
        self.items.push(ray);
        let last = self.len();
        self.sift_up(last);
    }

    pub fn pop_max(&mut self) -> Option<Ray> {
        if self.is_empty() {
            return None;
        }
        let last = self.len();
        self.items.swap(1, last);
        let top = self.items.pop();
        self.sift_down(1);
        top
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 1 {
            let parent = index / 2;
            if self.items[parent] >= self.items[index] {
                break;
            }
            self.items.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let last = self.len();
        loop {
            let left = 2 * index;
            let right = left + 1;
            if left > last {
                return;
            }
            let largest = if right <= last && self.items[right] > self.items[left] {
                right
            } else {
                left
            };
            if self.items[index] >= self.items[largest] {
                return;
            }
            self.items.swap(index, largest);
            index = largest;
        }
    }
}

impl Extend<Ray> for RayHeap {
    fn extend<I: IntoIterator<Item = Ray>>(&mut self, iter: I) {
        for ray in iter {
            self.push(ray);
        }
    }
}
