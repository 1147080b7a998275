//! Serializers for the individual sfnt tables and the file container.
//!
//! All values are big-endian. Each builder returns the unpadded table bytes;
//! [`write_sfnt`] pads, checksums and lays them out.

use super::FontSummary;
use super::names::FontNames;
use crate::metrics::HorizontalMetrics;
use std::collections::BTreeMap;

/// Magic constant used to derive `head.checkSumAdjustment`.
const CHECKSUM_MAGIC: u32 = 0xB1B0_AFBA;

/// Byte offset of `checkSumAdjustment` inside `head`.
const HEAD_CHECKSUM_OFFSET: usize = 8;

fn put_u16(data: &mut Vec<u8>, v: u16) {
    data.extend_from_slice(&v.to_be_bytes());
}

fn put_i16(data: &mut Vec<u8>, v: i16) {
    data.extend_from_slice(&v.to_be_bytes());
}

fn put_u32(data: &mut Vec<u8>, v: u32) {
    data.extend_from_slice(&v.to_be_bytes());
}

pub(super) fn tag_u32(tag: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*tag)
}

/// `(entrySelector, searchRange)` for a binary-search header over `count` items of `unit` bytes.
fn search_params(count: u16, unit: u16) -> (u16, u16) {
    let entry_selector = if count > 0 { 15 - count.leading_zeros() as u16 } else { 0 };
    let search_range = (1u16 << entry_selector) * unit;
    (entry_selector, search_range)
}

pub(super) fn build_head(summary: &FontSummary) -> Vec<u8> {
    let mut data = Vec::with_capacity(54);
    put_u32(&mut data, 0x0001_0000); // version
    put_u32(&mut data, 0x0001_0000); // fontRevision 1.0
    put_u32(&mut data, 0); // checkSumAdjustment, patched after layout
    put_u32(&mut data, 0x5F0F_3CF5); // magicNumber
    put_u16(&mut data, 0x0003); // flags: baseline at y=0, lsb at x=0
    put_u16(&mut data, summary.units_per_em);
    data.extend_from_slice(&0i64.to_be_bytes()); // created
    data.extend_from_slice(&0i64.to_be_bytes()); // modified
    put_i16(&mut data, summary.bounds.x_min as i16);
    put_i16(&mut data, summary.bounds.y_min as i16);
    put_i16(&mut data, summary.bounds.x_max as i16);
    put_i16(&mut data, summary.bounds.y_max as i16);
    put_u16(&mut data, 0); // macStyle
    put_u16(&mut data, 3); // lowestRecPPEM
    put_i16(&mut data, 2); // fontDirectionHint
    put_i16(&mut data, 1); // indexToLocFormat: long
    put_i16(&mut data, 0); // glyphDataFormat
    data
}

pub(super) fn build_hhea(summary: &FontSummary) -> Vec<u8> {
    let mut data = Vec::with_capacity(36);
    put_u32(&mut data, 0x0001_0000);
    put_i16(&mut data, summary.ascender);
    put_i16(&mut data, summary.descender);
    put_i16(&mut data, summary.line_gap);
    put_u16(&mut data, summary.advance_width_max);
    put_i16(&mut data, summary.min_left_side_bearing);
    put_i16(&mut data, summary.min_right_side_bearing);
    put_i16(&mut data, summary.x_max_extent);
    put_i16(&mut data, 1); // caretSlopeRise
    put_i16(&mut data, 0); // caretSlopeRun
    put_i16(&mut data, 0); // caretOffset
    for _ in 0..4 {
        put_i16(&mut data, 0); // reserved
    }
    put_i16(&mut data, 0); // metricDataFormat
    put_u16(&mut data, summary.num_glyphs);
    data
}

/// One full `longHorMetric` per glyph.
pub(super) fn build_hmtx(metrics: &[HorizontalMetrics]) -> Vec<u8> {
    let mut data = Vec::with_capacity(metrics.len() * 4);
    for m in metrics {
        put_u16(&mut data, m.advance_width);
        put_i16(&mut data, m.left_side_bearing);
    }
    data
}

/// `maxp` version 1.0 for glyphs without instructions or components.
pub(super) fn build_maxp(summary: &FontSummary) -> Vec<u8> {
    let mut data = Vec::with_capacity(32);
    put_u32(&mut data, 0x0001_0000);
    put_u16(&mut data, summary.num_glyphs);
    put_u16(&mut data, summary.max_points);
    put_u16(&mut data, summary.max_contours);
    put_u16(&mut data, 0); // maxCompositePoints
    put_u16(&mut data, 0); // maxCompositeContours
    put_u16(&mut data, 2); // maxZones
    put_u16(&mut data, 0); // maxTwilightPoints
    put_u16(&mut data, 0); // maxStorage
    put_u16(&mut data, 0); // maxFunctionDefs
    put_u16(&mut data, 0); // maxInstructionDefs
    put_u16(&mut data, 0); // maxStackElements
    put_u16(&mut data, 0); // maxSizeOfInstructions
    put_u16(&mut data, 0); // maxComponentElements
    put_u16(&mut data, 0); // maxComponentDepth
    data
}

/// `OS/2` version 4.
pub(super) fn build_os2(summary: &FontSummary, cmap: &BTreeMap<u32, u16>) -> Vec<u8> {
    let first_char = cmap.keys().next().copied().unwrap_or(0).min(0xFFFF) as u16;
    let last_char = cmap.keys().next_back().copied().unwrap_or(0).min(0xFFFF) as u16;

    let mut data = Vec::with_capacity(96);
    put_u16(&mut data, 4); // version
    put_i16(&mut data, summary.average_advance);
    put_u16(&mut data, 400); // usWeightClass: regular
    put_u16(&mut data, 5); // usWidthClass: medium
    put_u16(&mut data, 0); // fsType: installable
    for _ in 0..8 {
        put_i16(&mut data, 0); // sub/superscript sizes and offsets
    }
    put_i16(&mut data, summary.cell_size as i16); // yStrikeoutSize
    put_i16(&mut data, summary.strikeout_position);
    put_i16(&mut data, 0); // sFamilyClass
    data.extend_from_slice(&[0u8; 10]); // panose
    for range in unicode_ranges(cmap) {
        put_u32(&mut data, range);
    }
    data.extend_from_slice(b"NONE"); // achVendID
    put_u16(&mut data, 0x0040); // fsSelection: REGULAR
    put_u16(&mut data, first_char);
    put_u16(&mut data, last_char);
    put_i16(&mut data, summary.ascender); // sTypoAscender
    put_i16(&mut data, summary.descender); // sTypoDescender
    put_i16(&mut data, summary.line_gap); // sTypoLineGap
    put_u16(&mut data, summary.ascender as u16); // usWinAscent
    put_u16(&mut data, summary.descender.unsigned_abs()); // usWinDescent
    put_u32(&mut data, 1); // ulCodePageRange1: Latin 1
    put_u32(&mut data, 0); // ulCodePageRange2
    put_i16(&mut data, 0); // sxHeight
    put_i16(&mut data, 0); // sCapHeight
    put_u16(&mut data, 0); // usDefaultChar
    put_u16(&mut data, 0x20); // usBreakChar
    put_u16(&mut data, 0); // usMaxContext
    data
}

/// A coarse `ulUnicodeRange` bit set covering the blocks these fonts draw.
fn unicode_ranges(cmap: &BTreeMap<u32, u16>) -> [u32; 4] {
    let mut ranges = [0u32; 4];
    let mut set = |bit: usize| ranges[bit / 32] |= 1 << (bit % 32);
    for &code in cmap.keys() {
        match code {
            0x0000..=0x007F => set(0),  // Basic Latin
            0x0080..=0x00FF => set(1),  // Latin-1 Supplement
            0x0100..=0x017F => set(2),  // Latin Extended-A
            0x0370..=0x03FF => set(7),  // Greek and Coptic
            0x0400..=0x04FF => set(9),  // Cyrillic
            0x2000..=0x206F => set(31), // General Punctuation
            0x2070..=0x209F => set(32), // Superscripts and Subscripts
            0x2190..=0x21FF => set(37), // Arrows
            0x2200..=0x22FF => set(38), // Mathematical Operators
            0x10000.. => set(57),       // Non-Plane 0
            _ => {}
        }
    }
    ranges
}

/// `name` format 0 with Windows Unicode BMP records.
pub(super) fn build_name(names: &FontNames) -> Vec<u8> {
    let records = names.records();

    let mut strings = Vec::new();
    let mut entries = Vec::with_capacity(records.len());
    for (name_id, value) in &records {
        let encoded: Vec<u8> = value.encode_utf16().flat_map(|c| c.to_be_bytes()).collect();
        entries.push((*name_id, encoded.len() as u16, strings.len() as u16));
        strings.extend_from_slice(&encoded);
    }

    let mut data = Vec::new();
    put_u16(&mut data, 0); // format
    put_u16(&mut data, entries.len() as u16);
    put_u16(&mut data, (6 + entries.len() * 12) as u16); // stringOffset
    for (name_id, length, offset) in entries {
        put_u16(&mut data, 3); // platformID: Windows
        put_u16(&mut data, 1); // encodingID: Unicode BMP
        put_u16(&mut data, 0x0409); // languageID: en-US
        put_u16(&mut data, name_id);
        put_u16(&mut data, length);
        put_u16(&mut data, offset);
    }
    data.extend_from_slice(&strings);
    data
}

/// `post` 3.0: no glyph names.
pub(super) fn build_post() -> Vec<u8> {
    let mut data = Vec::with_capacity(32);
    put_u32(&mut data, 0x0003_0000);
    put_u32(&mut data, 0); // italicAngle
    put_i16(&mut data, 0); // underlinePosition
    put_i16(&mut data, 0); // underlineThickness
    put_u32(&mut data, 0); // isFixedPitch
    for _ in 0..4 {
        put_u32(&mut data, 0); // min/max memory hints
    }
    data
}

/// Concatenate glyph records (4-byte aligned) and return `(glyf, loca)`.
pub(super) fn build_glyf_loca(glyphs: &[Vec<u8>]) -> (Vec<u8>, Vec<u8>) {
    let mut glyf = Vec::new();
    let mut loca = Vec::with_capacity((glyphs.len() + 1) * 4);
    for glyph in glyphs {
        put_u32(&mut loca, glyf.len() as u32);
        glyf.extend_from_slice(glyph);
        while glyf.len() % 4 != 0 {
            glyf.push(0);
        }
    }
    put_u32(&mut loca, glyf.len() as u32);
    (glyf, loca)
}

/// Consecutive runs `(start_code, end_code, start_gid)` where both code
/// point and glyph id increase by one.
fn mapping_runs(cmap: &BTreeMap<u32, u16>) -> Vec<(u32, u32, u16)> {
    let mut runs: Vec<(u32, u32, u16)> = Vec::new();
    for (&code, &gid) in cmap {
        if let Some(last) = runs.last_mut()
            && code == last.1 + 1
            && u32::from(gid) == u32::from(last.2) + (code - last.0)
        {
            last.1 = code;
            continue;
        }
        runs.push((code, code, gid));
    }
    runs
}

/// Format 4 subtable for the BMP part of the map, using `idDelta` segments only.
fn cmap_format4(cmap: &BTreeMap<u32, u16>) -> Vec<u8> {
    let bmp: BTreeMap<u32, u16> = cmap
        .iter()
        .filter(|(code, _)| **code < 0xFFFF)
        .map(|(c, g)| (*c, *g))
        .collect();

    let mut segments: Vec<(u16, u16, i16)> = mapping_runs(&bmp)
        .into_iter()
        .map(|(start, end, gid)| (start as u16, end as u16, (i32::from(gid) - start as i32) as i16))
        .collect();
    segments.push((0xFFFF, 0xFFFF, 1)); // sentinel

    let seg_count_x2 = (segments.len() * 2) as u16;
    let (entry_selector, search_range) = search_params(segments.len() as u16, 2);
    let range_shift = seg_count_x2.saturating_sub(search_range);

    let mut data = Vec::new();
    put_u16(&mut data, 4); // format
    put_u16(&mut data, (16 + segments.len() * 8) as u16); // length
    put_u16(&mut data, 0); // language
    put_u16(&mut data, seg_count_x2);
    put_u16(&mut data, search_range);
    put_u16(&mut data, entry_selector);
    put_u16(&mut data, range_shift);
    for &(_, end, _) in &segments {
        put_u16(&mut data, end);
    }
    put_u16(&mut data, 0); // reservedPad
    for &(start, _, _) in &segments {
        put_u16(&mut data, start);
    }
    for &(_, _, delta) in &segments {
        put_i16(&mut data, delta);
    }
    for _ in &segments {
        put_u16(&mut data, 0); // idRangeOffset
    }
    data
}

/// Format 12 subtable covering the full map.
fn cmap_format12(cmap: &BTreeMap<u32, u16>) -> Vec<u8> {
    let runs = mapping_runs(cmap);
    let mut data = Vec::new();
    put_u16(&mut data, 12); // format
    put_u16(&mut data, 0); // reserved
    put_u32(&mut data, 16 + runs.len() as u32 * 12); // length
    put_u32(&mut data, 0); // language
    put_u32(&mut data, runs.len() as u32);
    for (start, end, gid) in runs {
        put_u32(&mut data, start);
        put_u32(&mut data, end);
        put_u32(&mut data, u32::from(gid));
    }
    data
}

/// `cmap` with a Windows BMP subtable, plus a full-repertoire subtable when
/// any code point lies outside the BMP.
pub(super) fn build_cmap(cmap: &BTreeMap<u32, u16>) -> Vec<u8> {
    let mut subtables: Vec<(u16, Vec<u8>)> = vec![(1, cmap_format4(cmap))];
    if cmap.keys().any(|&code| code > 0xFFFF) {
        subtables.push((10, cmap_format12(cmap)));
    }

    let mut data = Vec::new();
    put_u16(&mut data, 0); // version
    put_u16(&mut data, subtables.len() as u16);
    let mut offset = 4 + subtables.len() as u32 * 8;
    for (encoding_id, subtable) in &subtables {
        put_u16(&mut data, 3); // platformID: Windows
        put_u16(&mut data, *encoding_id);
        put_u32(&mut data, offset);
        offset += subtable.len() as u32;
    }
    for (_, subtable) in subtables {
        data.extend_from_slice(&subtable);
    }
    data
}

pub(super) fn calc_table_checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

/// Lay out tables (sorted by tag) behind the sfnt directory and patch
/// `head.checkSumAdjustment`.
pub(super) fn write_sfnt(mut tables: Vec<(u32, Vec<u8>)>) -> Vec<u8> {
    tables.sort_by_key(|(tag, _)| *tag);
    for (_, data) in tables.iter_mut() {
        while data.len() % 4 != 0 {
            data.push(0);
        }
    }

    let num_tables = tables.len() as u16;
    let (entry_selector, search_range) = search_params(num_tables, 16);
    let range_shift = (num_tables * 16).saturating_sub(search_range);

    let mut output = Vec::new();
    put_u32(&mut output, 0x0001_0000); // sfntVersion: TrueType outlines
    put_u16(&mut output, num_tables);
    put_u16(&mut output, search_range);
    put_u16(&mut output, entry_selector);
    put_u16(&mut output, range_shift);

    let mut table_offset = 12 + tables.len() * 16;
    let mut head_offset = None;
    for (tag, data) in &tables {
        if *tag == tag_u32(b"head") {
            head_offset = Some(table_offset);
        }
        put_u32(&mut output, *tag);
        put_u32(&mut output, calc_table_checksum(data));
        put_u32(&mut output, table_offset as u32);
        put_u32(&mut output, data.len() as u32);
        table_offset += data.len();
    }
    for (_, data) in &tables {
        output.extend_from_slice(data);
    }

    if let Some(offset) = head_offset {
        let adjustment = CHECKSUM_MAGIC.wrapping_sub(calc_table_checksum(&output));
        let at = offset + HEAD_CHECKSUM_OFFSET;
        output[at..at + 4].copy_from_slice(&adjustment.to_be_bytes());
    }
    output
}
