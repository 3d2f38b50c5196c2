use indoc::indoc as asm;
use pretty_assertions::assert_eq;
use yaxpeax_8086::{write_listing, BinaryDump, DecodeError, Listing, ListingError};

fn listing(data: &[u8]) -> String {
    let mut text = String::new();
    write_listing(data, &mut text).unwrap();
    text
}

#[test]
fn test_listing_37() {
    assert_eq!(
        listing(&[0b100010_0_1, 0b11_011_001]),
        asm! {"
            bits 16

            mov cx, bx
        "}
    );
}

#[test]
fn test_listing_38() {
    assert_eq!(
        listing(&[
            0b_10001001, 0b_11011001,
            0b_10001000, 0b_11100101,
            0b_10001001, 0b_11011010,
            0b_10001001, 0b_11011110,
            0b_10001001, 0b_11111011,
            0b_10001000, 0b_11001000,
            0b_10001000, 0b_11101101,
            0b_10001001, 0b_11000011,
            0b_10001001, 0b_11110011,
            0b_10001001, 0b_11111100,
            0b_10001001, 0b_11000101,
        ]),
        asm! {"
            bits 16

            mov cx, bx
            mov ch, ah
            mov dx, bx
            mov si, bx
            mov bx, di
            mov al, cl
            mov ch, ch
            mov bx, ax
            mov bx, si
            mov sp, di
            mov bp, ax
        "}
    );
}

#[test]
fn test_mixed_lengths() {
    assert_eq!(
        listing(&[
            0x8a, 0x56, 0x02,
            0x8b, 0x1e, 0x82, 0x0d,
            0x89, 0x8c, 0xd4, 0xfe,
            0x8a, 0x00,
        ]),
        asm! {"
            bits 16

            mov dl, [bp+2]
            mov bx, [3458]
            mov [si-300], cx
            mov al, [bx+si]
        "}
    );
}

#[test]
fn test_empty_input() {
    let mut text = String::new();
    assert_eq!(write_listing(&[], &mut text), Ok(0));
    assert_eq!(text, "bits 16\n\n");
}

#[test]
fn test_unrecognized_bytes_are_skipped() {
    let data = [0x00, 0xff, 0x89, 0xd9, 0x90, 0x88, 0xe5, 0xc3];
    let mut entries = Listing::new(&data);

    let (offset, inst) = entries.next().unwrap().unwrap();
    assert_eq!((offset, inst.to_string().as_str()), (2, "mov cx, bx"));
    let (offset, inst) = entries.next().unwrap().unwrap();
    assert_eq!((offset, inst.to_string().as_str()), (5, "mov ch, ah"));
    assert!(entries.next().is_none());
    assert_eq!(entries.skipped(), 4);

    assert_eq!(
        listing(&data),
        asm! {"
            bits 16

            mov cx, bx
            mov ch, ah
        "}
    );
}

#[test]
fn test_skipping_always_makes_progress() {
    // every byte that isn't a `mov` opcode, once each
    let data: Vec<u8> = (0..=255u8).filter(|b| b >> 2 != 0b100010).collect();
    let mut entries = Listing::new(&data);

    assert!(entries.next().is_none());
    assert_eq!(entries.skipped() as usize, data.len());
    assert_eq!(listing(&data), "bits 16\n\n");
}

#[test]
fn test_truncated_after_opcode() {
    let mut text = String::new();
    let result = write_listing(&[0x89, 0xd9, 0x88], &mut text);

    assert_eq!(
        result,
        Err(ListingError::Malformed { offset: 2, error: DecodeError::ExhaustedInput })
    );
    // the complete instruction before the cut is still there, and nothing after it
    assert_eq!(text, "bits 16\n\nmov cx, bx\n");
}

#[test]
fn test_truncated_displacement() {
    let data = [0x90, 0x8a, 0x80, 0x87];
    let mut entries = Listing::new(&data);

    assert_eq!(
        entries.next(),
        Some(Err(ListingError::Malformed { offset: 1, error: DecodeError::ExhaustedInput }))
    );
    // one error ends the listing
    assert_eq!(entries.next(), None);

    let error = ListingError::Malformed { offset: 1, error: DecodeError::ExhaustedInput };
    assert_eq!(error.to_string(), "malformed instruction at offset 0x1: exhausted input");
}

#[test]
fn test_binary_dump() {
    let dump = BinaryDump(&[0x89, 0xd9, 0x88, 0xe5, 0x01]);
    let lines: Vec<String> = dump.lines().map(|line| line.to_string()).collect();

    assert_eq!(lines, ["10001001 11011001", "10001000 11100101", "00000001"]);
    assert_eq!(
        dump.to_string(),
        asm! {"
            10001001 11011001
            10001000 11100101
            00000001
        "}
    );
    assert_eq!(BinaryDump(&[]).to_string(), "");
}

/// a fixed-capacity `core::fmt::Write` sink, the kind of buffer a `no_std` user has instead of
/// `String`.
struct StackBuf {
    bytes: [u8; 24],
    len: usize,
}

impl core::fmt::Write for StackBuf {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(core::fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

#[test]
fn test_listing_without_allocation() {
    let mut buf = StackBuf { bytes: [0; 24], len: 0 };
    assert_eq!(write_listing(&[0x89, 0xd9], &mut buf), Ok(1));
    assert_eq!(&buf.bytes[..buf.len], b"bits 16\n\nmov cx, bx\n");

    // a sink that fills up partway through the second line ends the listing with `Format`
    let mut buf = StackBuf { bytes: [0; 24], len: 0 };
    assert_eq!(
        write_listing(&[0x89, 0xd9, 0x88, 0xe5], &mut buf),
        Err(ListingError::Format)
    );
    assert!(buf.bytes[..buf.len].starts_with(b"bits 16\n\nmov cx, bx\n"));
}
