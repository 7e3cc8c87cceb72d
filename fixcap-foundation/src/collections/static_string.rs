// FIXCAP - fixcap-foundation
// Module: StaticString - Inline-storage terminated text buffer
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 The FIXCAP Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for the terminated view over the inline storage
#![allow(unsafe_code)]

//! Fixed-capacity text buffer with inline, always-terminated storage.
//!
//! `StaticString<N>` holds up to `N` bytes of content followed by a NUL
//! terminator. The terminator slot is part of the inline storage, so a
//! terminated view ([`StaticString::as_c_str`]) is available even when the
//! buffer is full.
//!
//! # Characteristics
//!
//! - **Zero allocation**: `N + 1` bytes inline, no provider
//! - **Silent truncation**: construction, append and assignment stop at
//!   capacity without signaling an error
//! - **Checked companions**: `try_push`, `try_push_str`, `try_resize` and
//!   `try_from_str` reject instead of truncating
//! - **Byte characters**: content is a sequence of `u8`; case conversion is
//!   ASCII-only

use core::{
    cmp::Ordering,
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Index, IndexMut},
    slice,
};

use fixcap_error::{Error, Result};

/// A text buffer with compile-time capacity and inline storage.
///
/// # Requirements
///
/// - REQ_RESOURCE_001: Static allocation only
/// - REQ_MEM_SAFETY_001: Bounds validation
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. The byte at logical index `len` is always `0`
/// 3. `terminator` is never written and stays `0`
///
/// # Examples
///
/// ```
/// use fixcap_foundation::StaticString;
///
/// let mut s = StaticString::<10>::new();
/// s += "123";
/// s += "456";
/// s += "7890a";
///
/// assert_eq!(s, "1234567890");
/// assert_eq!(s.len(), 10);
/// ```
#[derive(Clone, Copy)]
#[repr(C)]
pub struct StaticString<const N: usize> {
    /// Content storage, `[0, len)` is meaningful
    bytes: [u8; N],

    /// Terminator slot used when `len == N`
    terminator: u8,

    /// Current logical length
    /// Invariant: len <= N
    len: usize,
}

/// Sources that can be appended to a [`StaticString`].
///
/// Raw text (`&str`, `&[u8]`, `&CStr`) is terminator-delimited: copying stops
/// at the first NUL byte. Another `StaticString` contributes its whole logical
/// content.
pub trait TextSource {
    /// Appends `self` to `target`, truncating at its capacity.
    fn append_to<const N: usize>(self, target: &mut StaticString<N>);
}

impl<const N: usize> StaticString<N> {
    /// The compile-time capacity.
    pub const CAPACITY: usize = N;

    /// Creates a new empty string.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N > 0, "StaticString capacity must be positive") };
        Self {
            bytes: [0; N],
            terminator: 0,
            len: 0,
        }
    }

    /// Creates a string from terminator-delimited bytes, truncating at `N`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut s = Self::new();
        s.push_bytes(bytes);
        s
    }

    /// Creates a string from a C string, truncating at `N`.
    #[must_use]
    pub fn from_c_str(text: &CStr) -> Self {
        Self::from_bytes(text.to_bytes())
    }

    /// Copies the content of a string of any capacity.
    ///
    /// At most `min(other.len(), N)` bytes are copied.
    #[must_use]
    pub fn from_other<const M: usize>(other: &StaticString<M>) -> Self {
        let mut s = Self::new();
        s.push_raw(other.as_bytes());
        s
    }

    /// Creates a string from `text`, rejecting input longer than `N`.
    ///
    /// # Errors
    ///
    /// Returns a `SOURCE_TOO_LONG` capacity error if the text up to its first
    /// NUL byte does not fit.
    pub fn try_from_str(text: &str) -> Result<Self> {
        let mut s = Self::new();
        s.try_push_str(text)?;
        Ok(s)
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

    /// Returns `true` if the string is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no more bytes fit.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the number of bytes that can still be appended.
    #[inline]
    #[must_use]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Clears the string.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.terminate();
    }

    /// Appends one byte; a full string is left unchanged.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        if self.len < N {
            self.bytes[self.len] = byte;
            self.len += 1;
            self.terminate();
        } else {
            trace_truncation!("StaticString", N, 1_usize);
        }
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// Returns a `CAPACITY_EXCEEDED` error if the string is full.
    pub fn try_push(&mut self, byte: u8) -> Result<()> {
        if self.is_full() {
            return Err(Error::capacity_exceeded("StaticString capacity exceeded"));
        }
        self.push(byte);
        Ok(())
    }

    /// Appends the UTF-8 encoding of `ch`, truncating at capacity.
    pub fn push_char(&mut self, ch: char) {
        let mut encoded = [0_u8; 4];
        self.push_raw(ch.encode_utf8(&mut encoded).as_bytes());
    }

    /// Appends `text` up to its first NUL byte, truncating at capacity.
    #[inline]
    pub fn push_str(&mut self, text: &str) {
        self.push_bytes(text.as_bytes());
    }

    /// Appends `text` only if all of it fits.
    ///
    /// # Errors
    ///
    /// Returns a `SOURCE_TOO_LONG` error and leaves the string unchanged if
    /// the text up to its first NUL byte exceeds the remaining capacity.
    pub fn try_push_str(&mut self, text: &str) -> Result<()> {
        let text = until_nul(text.as_bytes());
        if text.len() > self.remaining_capacity() {
            return Err(Error::source_too_long(
                "text exceeds StaticString remaining capacity",
            ));
        }
        self.push_raw(text);
        Ok(())
    }

    /// Appends `bytes` up to their first NUL byte, truncating at capacity.
    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.push_raw(until_nul(bytes));
    }

    /// Appends any [`TextSource`], truncating at capacity.
    #[inline]
    pub fn append<S: TextSource>(&mut self, source: S) {
        source.append_to(self);
    }

    /// Replaces the content with `source`, truncating at capacity.
    #[inline]
    pub fn assign<S: TextSource>(&mut self, source: S) {
        self.clear();
        self.append(source);
    }

    /// Removes and returns the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        let last = self.last()?;
        self.len -= 1;
        self.terminate();
        Some(last)
    }

    /// Shortens the string to `len` bytes; longer lengths are ignored.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.terminate();
        }
    }

    /// Grows the string with `fill` or shrinks it to `new_len`.
    ///
    /// `new_len` must not exceed `N`. With contract checks disabled a larger
    /// length is clamped to `N`.
    pub fn resize(&mut self, new_len: usize, fill: u8) {
        contract!(
            new_len <= N,
            "StaticString::resize to {} exceeds capacity {}",
            new_len,
            N
        );
        if new_len > N {
            warn_contract_ignored!("StaticString", "resize", new_len);
        }
        let new_len = new_len.min(N);
        if new_len > self.len {
            self.bytes[self.len..new_len].fill(fill);
        }
        self.len = new_len;
        self.terminate();
    }

    /// Resizes the string only if `new_len` fits.
    ///
    /// # Errors
    ///
    /// Returns a `LENGTH_EXCEEDS_CAPACITY` error if `new_len > N`.
    pub fn try_resize(&mut self, new_len: usize, fill: u8) -> Result<()> {
        if new_len > N {
            return Err(Error::length_exceeds_capacity(
                "StaticString resize past capacity",
            ));
        }
        self.resize(new_len, fill);
        Ok(())
    }

    /// Returns the content without the terminator.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the content followed by its terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        // SAFETY: `repr(C)` places `bytes` at offset 0 immediately followed by
        // `terminator`, both `u8`, so the first `N + 1` bytes of `self` are
        // initialized and contiguous. `len <= N` keeps the view inside them,
        // and the pointer is derived from the whole struct.
        unsafe { slice::from_raw_parts((self as *const Self).cast::<u8>(), self.len + 1) }
    }

    /// Returns a terminated pointer to the content.
    #[inline]
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes_with_nul().as_ptr()
    }

    /// Returns the content as a C string.
    ///
    /// Content holding an interior NUL is cut at that byte, like any C
    /// consumer of [`StaticString::as_ptr`] would.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// Returns the content as `&str` if it is valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_UTF8` conversion error otherwise.
    pub fn to_str(&self) -> Result<&str> {
        core::str::from_utf8(self.as_bytes()).map_err(Error::from)
    }

    /// Returns the byte at `index`, or `None` past the length.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Returns the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `INDEX_OUT_OF_BOUNDS` error if `index >= len()`.
    pub fn try_at(&self, index: usize) -> Result<u8> {
        self.get(index)
            .ok_or(Error::index_out_of_bounds("StaticString index past length"))
    }

    /// Returns the first byte, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Returns the last byte, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Returns the first byte.
    ///
    /// # Panics
    ///
    /// Panics if the string is empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> u8 {
        self[0]
    }

    /// Returns the last byte.
    ///
    /// # Panics
    ///
    /// Panics if the string is empty.
    #[must_use]
    pub fn back(&self) -> u8 {
        assert!(self.len > 0, "StaticString::back on an empty string");
        self[self.len - 1]
    }

    /// Returns an iterator over the content bytes.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, u8> {
        self.as_bytes().iter()
    }

    /// Returns a copy with ASCII letters mapped to lowercase.
    #[must_use]
    pub fn to_ascii_lowercase(&self) -> Self {
        let mut out = *self;
        out.bytes[..out.len].make_ascii_lowercase();
        out
    }

    /// Returns a copy with ASCII letters mapped to uppercase.
    #[must_use]
    pub fn to_ascii_uppercase(&self) -> Self {
        let mut out = *self;
        out.bytes[..out.len].make_ascii_uppercase();
        out
    }

    /// Concatenates two strings into one whose capacity is `N + M`.
    ///
    /// `C` is usually inferred from the binding; any other value than
    /// `N + M` fails to compile.
    ///
    /// ```
    /// use fixcap_foundation::StaticString;
    ///
    /// let left = StaticString::<30>::from("hElLo/*-12");
    /// let joined: StaticString<40> = left.concat(&StaticString::<10>::from(" World!"));
    /// assert_eq!(joined, "hElLo/*-12 World!");
    /// ```
    #[must_use]
    pub fn concat<const M: usize, const C: usize>(
        &self,
        other: &StaticString<M>,
    ) -> StaticString<C> {
        const {
            assert!(
                C == N + M,
                "concatenation capacity must equal the sum of both capacities"
            );
        }
        let mut out = StaticString::<C>::from_other(self);
        out.push_raw(other.as_bytes());
        out
    }

    /// Appends raw bytes, NULs included, truncating at capacity.
    fn push_raw(&mut self, bytes: &[u8]) {
        let take = bytes.len().min(self.remaining_capacity());
        self.bytes[self.len..self.len + take].copy_from_slice(&bytes[..take]);
        self.len += take;
        self.terminate();
        if take < bytes.len() {
            trace_truncation!("StaticString", N, bytes.len() - take);
        }
    }

    /// Builds a string from the bytes of `buf` at and after `start`.
    ///
    /// Usable in constant expressions. `start` must not exceed `N`.
    pub(crate) const fn from_tail(buf: &[u8; N], start: usize) -> Self {
        let mut s = Self::new();
        let mut i = start;
        while i < N {
            s.bytes[s.len] = buf[i];
            s.len += 1;
            i += 1;
        }
        s
    }

    /// Rewrites the terminator after a mutation.
    #[inline]
    fn terminate(&mut self) {
        if self.len < N {
            self.bytes[self.len] = 0;
        }
    }
}

/// Returns `bytes` up to, not including, the first NUL.
fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

impl TextSource for &str {
    #[inline]
    fn append_to<const N: usize>(self, target: &mut StaticString<N>) {
        target.push_str(self);
    }
}

impl TextSource for &[u8] {
    #[inline]
    fn append_to<const N: usize>(self, target: &mut StaticString<N>) {
        target.push_bytes(self);
    }
}

impl TextSource for &CStr {
    #[inline]
    fn append_to<const N: usize>(self, target: &mut StaticString<N>) {
        target.push_bytes(self.to_bytes());
    }
}

impl TextSource for u8 {
    #[inline]
    fn append_to<const N: usize>(self, target: &mut StaticString<N>) {
        target.push(self);
    }
}

impl TextSource for char {
    #[inline]
    fn append_to<const N: usize>(self, target: &mut StaticString<N>) {
        target.push_char(self);
    }
}

impl<const M: usize> TextSource for &StaticString<M> {
    #[inline]
    fn append_to<const N: usize>(self, target: &mut StaticString<N>) {
        target.push_raw(self.as_bytes());
    }
}

impl<const M: usize> TextSource for StaticString<M> {
    #[inline]
    fn append_to<const N: usize>(self, target: &mut StaticString<N>) {
        target.push_raw(self.as_bytes());
    }
}

// Default: empty string
impl<const N: usize> Default for StaticString<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<&str> for StaticString<N> {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl<const N: usize> From<&[u8]> for StaticString<N> {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&CStr> for StaticString<N> {
    fn from(text: &CStr) -> Self {
        Self::from_c_str(text)
    }
}

// Range construction: every item is copied, NULs included
impl<const N: usize> FromIterator<u8> for StaticString<N> {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

impl<const N: usize> Extend<u8> for StaticString<N> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            if self.is_full() {
                trace_truncation!("StaticString", N);
                break;
            }
            self.bytes[self.len] = byte;
            self.len += 1;
        }
        self.terminate();
    }
}

impl<'a, const N: usize> Extend<&'a u8> for StaticString<N> {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<const N: usize> Index<usize> for StaticString<N> {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        assert!(
            index < self.len,
            "index {index} out of range for StaticString of length {}",
            self.len
        );
        &self.bytes[index]
    }
}

impl<const N: usize> IndexMut<usize> for StaticString<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        assert!(
            index < self.len,
            "index {index} out of range for StaticString of length {}",
            self.len
        );
        &mut self.bytes[index]
    }
}

impl<const N: usize> AsRef<[u8]> for StaticString<N> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a, const N: usize> IntoIterator for &'a StaticString<N> {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Equality compares logical content only
impl<const N: usize, const M: usize> PartialEq<StaticString<M>> for StaticString<N> {
    #[inline]
    fn eq(&self, other: &StaticString<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for StaticString<N> {}

impl<const N: usize> PartialEq<str> for StaticString<N> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for StaticString<N> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<[u8]> for StaticString<N> {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<StaticString<N>> for str {
    #[inline]
    fn eq(&self, other: &StaticString<N>) -> bool {
        other == self
    }
}

impl<const N: usize> PartialEq<StaticString<N>> for &str {
    #[inline]
    fn eq(&self, other: &StaticString<N>) -> bool {
        other == *self
    }
}

impl<const N: usize> PartialOrd for StaticString<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for StaticString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<const N: usize> Hash for StaticString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<const N: usize, S: TextSource> AddAssign<S> for StaticString<N> {
    #[inline]
    fn add_assign(&mut self, source: S) {
        self.append(source);
    }
}

// buffer + text keeps the buffer's capacity
impl<const N: usize> Add<&str> for StaticString<N> {
    type Output = StaticString<N>;

    fn add(mut self, text: &str) -> StaticString<N> {
        self.push_str(text);
        self
    }
}

// text + buffer takes the buffer's capacity
impl<const N: usize> Add<StaticString<N>> for &str {
    type Output = StaticString<N>;

    fn add(self, rhs: StaticString<N>) -> StaticString<N> {
        let mut out = StaticString::<N>::from(self);
        out.push_raw(rhs.as_bytes());
        out
    }
}

// Formatting into a full string truncates instead of failing
impl<const N: usize> fmt::Write for StaticString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Display for StaticString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for StaticString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
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
    fn verify_terminator_after_push() {
        let mut s: StaticString<3> = StaticString::new();
        let pushes: u8 = kani::any();
        kani::assume(pushes <= 4);

        for _ in 0..pushes {
            s.push(b'x');
        }

        assert!(s.len() <= 3);
        assert!(s.as_bytes_with_nul()[s.len()] == 0);
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
        let s = StaticString::<10>::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 10);
        assert_eq!(s.as_bytes_with_nul(), b"\0");
        assert_eq!(s, "");
        assert_ne!(s, " ");
    }

    #[test]
    fn test_terminator_when_full() {
        let s = StaticString::<4>::from("abcdef");
        assert!(s.is_full());
        assert_eq!(s.as_bytes_with_nul(), b"abcd\0");
        assert_eq!(s.as_c_str().to_bytes(), b"abcd");
    }

    #[test]
    fn test_terminator_rewritten_after_shrink() {
        let mut s = StaticString::<8>::from("abcdef");
        s.truncate(2);
        assert_eq!(s.as_bytes_with_nul(), b"ab\0");
        s.clear();
        assert_eq!(s.as_bytes_with_nul(), b"\0");
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_text_sources_stop_at_nul() {
        let s = StaticString::<10>::from("ab\0cd");
        assert_eq!(s, "ab");

        let raw: StaticString<10> = b"ab\0cd".iter().copied().collect();
        assert_eq!(raw.len(), 5);
        assert_eq!(raw.as_c_str().to_bytes(), b"ab");
    }

    #[test]
    fn test_push_char_utf8() {
        let mut s = StaticString::<4>::new();
        s.push_char('é');
        assert_eq!(s.len(), 2);
        assert_eq!(s.to_str(), Ok("é"));
    }

    #[test]
    fn test_try_push_str_leaves_content_on_error() {
        let mut s = StaticString::<5>::from("abc");
        let error = s.try_push_str("def").unwrap_err();
        assert_eq!(error.code, fixcap_error::codes::SOURCE_TOO_LONG);
        assert_eq!(s, "abc");
        assert!(s.try_push_str("de").is_ok());
        assert_eq!(s, "abcde");
        assert!(s.try_push(b'x').is_err());
    }

    #[test]
    fn test_try_at() {
        let s = StaticString::<4>::from("ab");
        assert_eq!(s.try_at(1), Ok(b'b'));
        assert_eq!(
            s.try_at(2).unwrap_err().code,
            fixcap_error::codes::INDEX_OUT_OF_BOUNDS
        );
    }

    #[test]
    fn test_debug_escapes() {
        let s = StaticString::<8>::from_iter(*b"a\"\n");
        let mut out = StaticString::<32>::new();
        core::fmt::Write::write_fmt(&mut out, format_args!("{:?}", s)).unwrap();
        assert_eq!(out, "\"a\\\"\\n\"");
    }
}
