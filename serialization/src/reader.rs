use std::io;
use std::convert::TryFrom;
use compact_integer::CompactInteger;

/// Upper bound on buffers reserved ahead of reading from an untrusted length prefix.
pub(crate) const MAX_PREALLOCATION: usize = 1024;

pub fn deserialize<R, T>(buffer: R) -> Result<T, Error> where R: io::Read, T: Deserializable {
	let mut reader = Reader::from_read(buffer);
	let result = reader.read()?;

	if reader.is_finished() {
		Ok(result)
	} else {
		Err(Error::UnreadData)
	}
}

#[derive(Debug, PartialEq)]
pub enum Error {
	MalformedData,
	UnexpectedEnd,
	UnreadData,
	InvalidFormat(String),
}

impl From<io::Error> for Error {
	fn from(_: io::Error) -> Self {
		Error::UnexpectedEnd
	}
}

pub trait Deserializable {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read;
}

/// Transaction data reader.
#[derive(Debug)]
pub struct Reader<T> {
	buffer: T,
	peeked: Option<u8>,
}

impl<'a> Reader<&'a [u8]> {
	/// Convenient way of creating for slice of bytes
	pub fn new(buffer: &'a [u8]) -> Self {
		Reader {
			buffer: buffer,
			peeked: None,
		}
	}
}

impl<T> io::Read for Reader<T> where T: io::Read {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
		// most of the times, there will be nothing in peeked,
		// so to make it as efficient as possible, check it
		// only once
		match self.peeked.take() {
			None => io::Read::read(&mut self.buffer, buf),
			Some(peeked) if buf.is_empty() => {
				self.peeked = Some(peeked);
				Ok(0)
			},
			Some(peeked) => {
				buf[0] = peeked;
				io::Read::read(&mut self.buffer, &mut buf[1..]).map(|x| x + 1)
			},
		}
	}
}

impl<R> Reader<R> where R: io::Read {
	pub fn from_read(read: R) -> Self {
		Reader {
			buffer: read,
			peeked: None,
		}
	}

	pub fn read<T>(&mut self) -> Result<T, Error> where T: Deserializable {
		T::deserialize(self)
	}

	pub fn read_slice(&mut self, bytes: &mut [u8]) -> Result<(), Error> {
		io::Read::read_exact(self, bytes).map_err(|_| Error::UnexpectedEnd)
	}

	pub fn read_list<T>(&mut self) -> Result<Vec<T>, Error> where T: Deserializable {
		let len = usize::try_from(self.read::<CompactInteger>()?)?;
		let mut result = Vec::with_capacity(len.min(MAX_PREALLOCATION));

		for _ in 0..len {
			result.push(self.read()?);
		}

		Ok(result)
	}

	pub fn is_finished(&mut self) -> bool {
		if self.peeked.is_some() {
			return false;
		}

		let peek: &mut [u8] = &mut [0u8];
		match self.read_slice(peek) {
			Ok(_) => {
				self.peeked = Some(peek[0]);
				false
			},
			Err(_) => true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{Reader, Error, deserialize};

	#[test]
	fn test_reader_read() {
		let buffer = vec![
			1,
			2, 0,
			3, 0, 0, 0,
			4, 0, 0, 0, 0, 0, 0, 0
		];

		let mut reader = Reader::new(&buffer);
		assert!(!reader.is_finished());
		assert_eq!(1u8, reader.read().unwrap());
		assert_eq!(2u16, reader.read().unwrap());
		assert_eq!(3u32, reader.read().unwrap());
		assert_eq!(4u64, reader.read().unwrap());
		assert!(reader.is_finished());
		assert_eq!(Error::UnexpectedEnd, reader.read::<u8>().unwrap_err());
	}

	#[test]
	fn test_deserialize_unread_data() {
		let buffer: &[u8] = &[1, 0, 0, 0, 0xff];
		assert_eq!(deserialize::<_, u32>(buffer).unwrap_err(), Error::UnreadData);
	}

	#[test]
	fn test_read_list() {
		let buffer: &[u8] = &[2, 1, 0, 0, 0, 2, 0, 0, 0];
		let mut reader = Reader::new(buffer);
		assert_eq!(reader.read_list::<u32>().unwrap(), vec![1, 2]);
		assert!(reader.is_finished());
	}

	#[test]
	fn test_read_list_huge_count_on_short_buffer() {
		// count 2^32, a single element follows
		let buffer: &[u8] = &[0xff, 0, 0, 0, 0, 1, 0, 0, 0, 7, 0, 0, 0];
		let mut reader = Reader::new(buffer);
		assert_eq!(reader.read_list::<u32>().unwrap_err(), Error::UnexpectedEnd);
	}
}
