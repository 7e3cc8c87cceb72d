// FIXCAP - fixcap-foundation
// Module: StaticVec - Inline-storage vector for plain-data elements
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001, REQ_TEMPORAL_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for MaybeUninit operations (documented and verified via KANI)
#![allow(unsafe_code)]

//! Static vector with inline storage and compile-time capacity.
//!
//! `StaticVec<T, N>` provides a fixed-capacity vector with all storage
//! inline. Elements must be `Copy`: no per-element construction, copy or drop
//! logic exists, so push and pop are plain length arithmetic.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All memory is inline `[MaybeUninit<T>; N]`
//! - **Uninitialized tail**: slots in `[len, N)` are never zeroed
//! - **Const-time operations**: `push_back()`, `pop_back()` are O(1)
//! - **Contract checks**: pushing into a full vector, popping an empty one and
//!   resizing past capacity are precondition violations

use core::{
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut, Index, IndexMut},
    slice,
};

use fixcap_error::{Error, Result};

/// A vector of `Copy` elements with compile-time capacity and inline storage.
///
/// # Requirements
///
/// - REQ_RESOURCE_001: Static allocation only
/// - REQ_MEM_SAFETY_001: Bounds validation
/// - REQ_TEMPORAL_001: Constant-time operations
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Elements in `[0, len)` are initialized
/// 3. When `len == 0`, vector is empty
/// 4. When `len == N`, vector is full
///
/// # Examples
///
/// ```
/// use fixcap_foundation::StaticVec;
///
/// let mut vec = StaticVec::<i32, 10>::new();
/// vec.push_back(1);
/// vec.push_back(2);
///
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec.front(), 1);
/// assert_eq!(vec.back(), 2);
/// assert_eq!(vec, [1, 2]);
/// ```
#[derive(Clone, Copy)]
pub struct StaticVec<T: Copy, const N: usize> {
    /// Inline storage for elements
    data: [MaybeUninit<T>; N],

    /// Number of initialized elements
    /// Invariant: len <= N
    len: usize,
}

impl<T: Copy, const N: usize> StaticVec<T, N> {
    /// The compile-time capacity.
    pub const CAPACITY: usize = N;

    /// Creates a new empty vector.
    ///
    /// # Const-time Guarantee
    ///
    /// O(1); the backing storage is left uninitialized.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N > 0, "StaticVec capacity must be positive") };
        Self {
            data: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Creates a vector holding `count` copies of `value`.
    ///
    /// `count` must not exceed `N`. With contract checks disabled a larger
    /// count is clamped to `N`.
    #[must_use]
    pub fn from_elem(value: T, count: usize) -> Self {
        let mut vec = Self::new();
        vec.resize(count, value);
        vec
    }

    /// Creates a vector from the first `N` elements of `values`.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        let mut vec = Self::new();
        vec.extend_from_slice(values);
        vec
    }

    /// Returns the current length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the vector is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the vector is full.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the number of elements that can still be pushed.
    #[inline]
    #[must_use]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns the initialized elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: elements in [0, len) are initialized and len <= N
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the initialized elements mutably.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: elements in [0, len) are initialized and len <= N
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Appends an element.
    ///
    /// The vector must not be full. With contract checks disabled a push into
    /// a full vector is a no-op.
    ///
    /// # Const-time Guarantee
    ///
    /// O(1).
    #[inline]
    pub fn push_back(&mut self, value: T) {
        contract!(self.len < N, "StaticVec::push_back on a full vector (capacity {})", N);
        if self.len < N {
            self.data[self.len].write(value);
            self.len += 1;
        } else {
            warn_contract_ignored!("StaticVec", "push_back", self.len);
        }
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns `Err(CapacityExceeded)` if vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixcap_foundation::StaticVec;
    ///
    /// let mut vec = StaticVec::<u32, 2>::new();
    /// vec.try_push(1)?;
    /// vec.try_push(2)?;
    /// assert!(vec.try_push(3).is_err()); // Full
    /// # Ok::<(), fixcap_error::Error>(())
    /// ```
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<()> {
        if self.len >= N {
            return Err(Error::capacity_exceeded("StaticVec capacity exceeded"));
        }
        self.data[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the last element.
    ///
    /// The vector must not be empty. With contract checks disabled popping an
    /// empty vector is a no-op.
    #[inline]
    pub fn pop_back(&mut self) {
        contract!(self.len > 0, "StaticVec::pop_back on an empty vector");
        if self.len > 0 {
            self.len -= 1;
        } else {
            warn_contract_ignored!("StaticVec", "pop_back", self.len);
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns an `EMPTY_CONTAINER` error if the vector is empty.
    pub fn try_pop_back(&mut self) -> Result<T> {
        self.pop()
            .ok_or(Error::empty_container("StaticVec::pop_back on an empty vector"))
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        let last = self.last().copied()?;
        self.len -= 1;
        Some(last)
    }

    /// Clears the vector.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shortens the vector to `len` elements; longer lengths are ignored.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Grows the vector with `fill` or shrinks it to `new_len`.
    ///
    /// `new_len` must not exceed `N`. With contract checks disabled a larger
    /// length is clamped to `N`.
    pub fn resize(&mut self, new_len: usize, fill: T) {
        contract!(
            new_len <= N,
            "StaticVec::resize to {} exceeds capacity {}",
            new_len,
            N
        );
        if new_len > N {
            warn_contract_ignored!("StaticVec", "resize", new_len);
        }
        let new_len = new_len.min(N);
        if new_len > self.len {
            for slot in &mut self.data[self.len..new_len] {
                slot.write(fill);
            }
        }
        self.len = new_len;
    }

    /// Resizes the vector only if `new_len` fits.
    ///
    /// # Errors
    ///
    /// Returns a `LENGTH_EXCEEDS_CAPACITY` error if `new_len > N`.
    pub fn try_resize(&mut self, new_len: usize, fill: T) -> Result<()> {
        if new_len > N {
            return Err(Error::length_exceeds_capacity(
                "StaticVec resize past capacity",
            ));
        }
        self.resize(new_len, fill);
        Ok(())
    }

    /// Appends elements from `values`, truncating at capacity.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        let take = values.len().min(self.remaining_capacity());
        for (slot, value) in self.data[self.len..self.len + take].iter_mut().zip(values) {
            slot.write(*value);
        }
        self.len += take;
        if take < values.len() {
            trace_truncation!("StaticVec", N, values.len() - take);
        }
    }

    /// Appends elements from `values` only if all of them fit.
    ///
    /// # Errors
    ///
    /// Returns a `SOURCE_TOO_LONG` error and leaves the vector unchanged if
    /// `values` exceeds the remaining capacity.
    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<()> {
        if values.len() > self.remaining_capacity() {
            return Err(Error::source_too_long(
                "slice exceeds StaticVec remaining capacity",
            ));
        }
        self.extend_from_slice(values);
        Ok(())
    }

    /// Appends every element of any iterable source, truncating at capacity.
    #[inline]
    pub fn append<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.extend(other);
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `INDEX_OUT_OF_BOUNDS` error if `index >= len()`.
    pub fn try_at(&self, index: usize) -> Result<T> {
        self.get(index)
            .copied()
            .ok_or(Error::index_out_of_bounds("StaticVec index past length"))
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> T {
        self[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    pub fn back(&self) -> T {
        *self.back_ref()
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self[0]
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "StaticVec::back on an empty vector");
        let last = self.len - 1;
        &mut self[last]
    }

    /// Compares the elements with any iterable sequence.
    ///
    /// ```
    /// use fixcap_foundation::StaticVec;
    ///
    /// let vec = StaticVec::<i32, 4>::from([1, 2, 3]);
    /// let narrow: [i8; 3] = [1, 2, 3];
    /// assert!(vec.eq_iter(narrow.iter().map(|&x| i32::from(x))));
    /// assert!(!vec.eq_iter([1, 2]));
    /// ```
    pub fn eq_iter<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        T: PartialEq<I::Item>,
    {
        self.iter().copied().eq(other)
    }

    fn back_ref(&self) -> &T {
        assert!(self.len > 0, "StaticVec::back on an empty vector");
        &self[self.len - 1]
    }
}

// Default: empty vector
impl<T: Copy, const N: usize> Default for StaticVec<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Literal list construction stops silently once full
impl<T: Copy, const N: usize, const K: usize> From<[T; K]> for StaticVec<T, N> {
    fn from(values: [T; K]) -> Self {
        Self::from_slice(&values)
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        let mut vec = Self::new();
        vec.try_extend_from_slice(values)?;
        Ok(vec)
    }
}

impl<T: Copy, const N: usize> FromIterator<T> for StaticVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Copy, const N: usize> Extend<T> for StaticVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if self.is_full() {
                trace_truncation!("StaticVec", N);
                break;
            }
            self.data[self.len].write(value);
            self.len += 1;
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for StaticVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Copy, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy, const N: usize> DerefMut for StaticVec<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Copy, const N: usize> Index<usize> for StaticVec<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "index {index} out of range for StaticVec of length {}",
            self.len
        );
        &self.as_slice()[index]
    }
}

impl<T: Copy, const N: usize> IndexMut<usize> for StaticVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "index {index} out of range for StaticVec of length {}",
            self.len
        );
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Copy, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Element-wise equality across capacities and element types
impl<T, U, const N: usize, const M: usize> PartialEq<StaticVec<U, M>> for StaticVec<T, N>
where
    T: Copy + PartialEq<U>,
    U: Copy,
{
    #[inline]
    fn eq(&self, other: &StaticVec<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, const N: usize> Eq for StaticVec<T, N> {}

impl<T, U, const N: usize> PartialEq<[U]> for StaticVec<T, N>
where
    T: Copy + PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for StaticVec<T, N>
where
    T: Copy + PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize, const K: usize> PartialEq<[U; K]> for StaticVec<T, N>
where
    T: Copy + PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; K]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_len_never_exceeds_capacity() {
        let mut vec: StaticVec<u8, 3> = StaticVec::new();
        let pushes: u8 = kani::any();
        kani::assume(pushes <= 4);

        for i in 0..pushes {
            let _ = vec.try_push(i);
        }

        assert!(vec.len() <= 3);
    }

    #[kani::proof]
    fn verify_resize_clamps() {
        let mut vec: StaticVec<u32, 4> = StaticVec::new();
        let target: usize = kani::any();
        kani::assume(target <= 4);

        vec.resize(target, 7);
        assert!(vec.len() == target);
        vec.truncate(0);
        assert!(vec.is_empty());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let vec: StaticVec<u32, 10> = StaticVec::new();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 10);
        assert!(vec.is_empty());
        assert!(vec.iter().next().is_none());
    }

    #[test]
    fn test_inline_size() {
        assert_eq!(
            core::mem::size_of::<StaticVec<i32, 10>>(),
            40 + core::mem::size_of::<usize>()
        );
        assert_eq!(
            core::mem::size_of::<StaticVec<i8, 80>>(),
            80 + core::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_push_pop() {
        let mut vec = StaticVec::<u32, 3>::new();
        vec.push_back(1);
        vec.push_back(2);
        assert_eq!(vec.back(), 2);

        vec.pop_back();
        assert_eq!(vec.len(), 1);
        assert_eq!(vec.pop(), Some(1));
        assert_eq!(vec.pop(), None);
    }

    #[test]
    fn test_capacity_exceeded() -> Result<()> {
        let mut vec = StaticVec::<u32, 2>::new();

        vec.try_push(1)?;
        vec.try_push(2)?;
        let error = vec.try_push(3).unwrap_err();
        assert!(error.is_capacity_error());
        assert_eq!(vec.len(), 2);

        Ok(())
    }

    #[test]
    fn test_try_resize_unchanged_on_error() {
        let mut vec = StaticVec::<u8, 4>::from([1, 2]);
        assert!(vec.try_resize(5, 0).is_err());
        assert_eq!(vec, [1, 2]);
        assert!(vec.try_resize(4, 9).is_ok());
        assert_eq!(vec, [1, 2, 9, 9]);
    }

    #[test]
    fn test_checked_access() {
        let mut vec = StaticVec::<i32, 4>::from([5]);
        assert_eq!(vec.try_at(0), Ok(5));
        assert!(vec.try_at(1).unwrap_err().is_bounds_error());
        assert_eq!(vec.try_pop_back(), Ok(5));
        assert_eq!(
            vec.try_pop_back().unwrap_err().code,
            fixcap_error::codes::EMPTY_CONTAINER
        );
    }

    #[test]
    fn test_front_back_mut() {
        let mut vec = StaticVec::<i32, 4>::from([1, 2, 3]);
        *vec.front_mut() = 10;
        *vec.back_mut() = 30;
        assert_eq!(vec, [10, 2, 30]);
    }

    #[test]
    fn test_try_from_slice() {
        let values = [1_u16, 2, 3];
        let fits = StaticVec::<u16, 3>::try_from(&values[..]);
        assert_eq!(fits.map(|v| v.len()), Ok(3));

        let too_long = StaticVec::<u16, 2>::try_from(&values[..]);
        assert!(too_long.is_err());
    }
}
