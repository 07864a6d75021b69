/// Previous index in a cyclic list of `len` entries.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

/// Next index in a cyclic list of `len` entries.
pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves `index` by `delta` without wrapping, staying inside `0..len`.
pub const fn clamp_step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let moved = index.saturating_add_signed(delta);
    if moved >= len {
        len - 1
    } else {
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_cycles() {
        assert_eq!(wrap_increment(3, 4), 0);
        assert_eq!(wrap_decrement(0, 4), 3);
        assert_eq!(wrap_increment(0, 0), 0);
    }

    #[test]
    fn clamping_stops_at_the_ends() {
        assert_eq!(clamp_step(2, -5, 10), 0);
        assert_eq!(clamp_step(8, 5, 10), 9);
        assert_eq!(clamp_step(4, 1, 10), 5);
        assert_eq!(clamp_step(4, 1, 0), 0);
    }
}
