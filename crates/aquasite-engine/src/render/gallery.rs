/// Split `images` into rows of four; the last row holds the remainder.
pub fn chunk_block4<T: Clone>(images: &[T]) -> Vec<Vec<T>> {
    images.chunks(4).map(<[T]>::to_vec).collect()
}
