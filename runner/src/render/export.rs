use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;

use super::raster::Raster;

pub fn encode_png<W>(raster: &Raster, writer: W) -> anyhow::Result<()>
where
    W: Write,
{
    let mut encoder = png::Encoder::new(writer, raster.width, raster.height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header().context("Couldn't write PNG header")?;
    png_writer
        .write_image_data(&raster.buffer)
        .context("Couldn't write PNG data")?;
    png_writer.finish().context("Couldn't finish PNG")?;

    Ok(())
}

pub fn save_png<P>(raster: &Raster, path: P) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Couldn't create {}", path.display()))?;

    encode_png(raster, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use liblife::board::GameBoard;

    use super::*;

    #[test]
    fn encodes_a_png_stream() {
        let raster = Raster::from_board(&GameBoard::with_alive(20, [[5, 5]]), 2).unwrap();
        let mut encoded = Vec::new();

        encode_png(&raster, &mut encoded).unwrap();

        assert!(encoded.starts_with(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']));

        let decoder = png::Decoder::new(encoded.as_slice());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();

        assert_eq!((info.width, info.height), (40, 40));
        assert_eq!(info.color_type, png::ColorType::Grayscale);
    }
}
